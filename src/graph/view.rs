//! World-to-screen mapping for the graphing demo
//!
//! World space is the usual math orientation (y up, origin wherever the
//! user put it); screen space is top-left origin, y down.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// A line segment in screen space, ready to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Where the graph origin sits on screen and how many pixels one world
/// unit covers
#[derive(Debug, Clone, Copy)]
pub struct GraphView {
    /// Screen position of the world origin
    pub origin: Vec2,
    /// Pixels per world unit
    pub scale: f32,
}

impl Default for GraphView {
    fn default() -> Self {
        Self {
            origin: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            scale: 60.0,
        }
    }
}

impl GraphView {
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(
            self.origin.x + world.x * self.scale,
            self.origin.y - world.y * self.scale,
        )
    }

    /// A screen-space segment between two world-space points
    pub fn segment(&self, from: Vec2, to: Vec2) -> Segment {
        Segment {
            from: self.world_to_screen(from),
            to: self.world_to_screen(to),
        }
    }

    /// The x/y axes (full screen width/height through the origin) plus
    /// tick marks every world unit out to `num_ticks`.
    pub fn axes(&self, num_ticks: u32) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(2 + num_ticks as usize * 4);

        // Axis lines are drawn in screen space so they always span the
        // whole window
        segments.push(Segment {
            from: Vec2::new(self.origin.x, 0.0),
            to: Vec2::new(self.origin.x, SCREEN_HEIGHT),
        });
        segments.push(Segment {
            from: Vec2::new(0.0, self.origin.y),
            to: Vec2::new(SCREEN_WIDTH, self.origin.y),
        });

        // Ticks live in world space so they follow the origin and scale
        let half_tick = 0.1;
        for i in 1..=num_ticks {
            let i = i as f32;
            segments.push(self.segment(Vec2::new(i, half_tick), Vec2::new(i, -half_tick)));
            segments.push(self.segment(Vec2::new(-i, half_tick), Vec2::new(-i, -half_tick)));
            segments.push(self.segment(Vec2::new(-half_tick, i), Vec2::new(half_tick, i)));
            segments.push(self.segment(Vec2::new(-half_tick, -i), Vec2::new(half_tick, -i)));
        }

        segments
    }
}
