//! Demo state for the graphing mode
//!
//! Mirrors the arcade sim's shape: the shell owns a `GraphDemo`, feeds it
//! per-frame input, and reads segments back out for drawing.

use glam::Vec2;

use super::curve::{self, Curve};
use super::view::{GraphView, Segment};

/// Number of tick marks drawn along each axis direction
const AXIS_TICKS: u32 = 20;

/// Input sampled by the shell for one frame of the graphing demo
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphInput {
    /// Held number keys select curves; index i shows `Curve::ALL[i]`
    pub show: [bool; 5],
    /// Pointer click moves the graph origin here
    pub move_origin: Option<Vec2>,
}

/// The graphing demo: a view plus accumulated time for animated curves
#[derive(Debug, Default)]
pub struct GraphDemo {
    pub view: GraphView,
    /// Seconds since the demo started, drives the traveling sine
    pub total_time: f32,
}

impl GraphDemo {
    /// Advance one frame: accumulate time, honor an origin move
    pub fn advance(&mut self, input: &GraphInput, elapsed_seconds: f32) {
        self.total_time += elapsed_seconds;

        if let Some(origin) = input.move_origin {
            self.view.origin = origin;
        }
    }

    /// Axis + tick segments for the current view
    pub fn axes(&self) -> Vec<Segment> {
        self.view.axes(AXIS_TICKS)
    }

    /// Segments for every curve selected this frame, tagged by curve
    pub fn curves(&self, input: &GraphInput) -> Vec<(Curve, Vec<Segment>)> {
        Curve::ALL
            .iter()
            .zip(input.show)
            .filter(|&(_, held)| held)
            .map(|(&c, _)| (c, curve::sample(&self.view, c, self.total_time)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_accumulates() {
        let mut demo = GraphDemo::default();
        demo.advance(&GraphInput::default(), 0.5);
        demo.advance(&GraphInput::default(), 0.25);
        assert_eq!(demo.total_time, 0.75);
    }

    #[test]
    fn test_origin_follows_click() {
        let mut demo = GraphDemo::default();
        let input = GraphInput {
            move_origin: Some(Vec2::new(10.0, 20.0)),
            ..Default::default()
        };
        demo.advance(&input, 0.016);
        assert_eq!(demo.view.origin, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_only_held_curves_are_sampled() {
        let demo = GraphDemo::default();
        let mut input = GraphInput::default();
        assert!(demo.curves(&input).is_empty());

        input.show[0] = true;
        input.show[3] = true;
        let curves = demo.curves(&input);
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].0, Curve::Parabola);
        assert_eq!(curves[1].0, Curve::Sine);
    }
}
