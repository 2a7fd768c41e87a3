//! The curves the demo can plot, and polyline sampling
//!
//! Each curve is a closed-form y = f(x, t); sampling walks x across a
//! fixed window and emits one segment per step from the previous sample
//! to the current one.

use glam::Vec2;

use super::view::{GraphView, Segment};

/// Sampling window along the world x axis
pub const X_START: f32 = -20.0;
pub const X_END: f32 = 20.0;
pub const X_STEP: f32 = 0.1;

/// Curves selectable in the demo (number keys 1-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    /// y = x^2
    Parabola,
    /// y = x^3
    Cubic,
    /// y = 2^x
    Exp2,
    /// y = sin(x)
    Sine,
    /// y = sin((x + t) * 2) - scrolls with time
    TravelingSine,
}

impl Curve {
    pub const ALL: [Curve; 5] = [
        Curve::Parabola,
        Curve::Cubic,
        Curve::Exp2,
        Curve::Sine,
        Curve::TravelingSine,
    ];

    pub fn eval(self, x: f32, time: f32) -> f32 {
        match self {
            Curve::Parabola => x * x,
            Curve::Cubic => x * x * x,
            Curve::Exp2 => 2.0f32.powf(x),
            Curve::Sine => x.sin(),
            Curve::TravelingSine => ((x + time) * 2.0).sin(),
        }
    }
}

/// Sample a curve into screen-space segments over the standard window
pub fn sample(view: &GraphView, curve: Curve, time: f32) -> Vec<Segment> {
    let mut segments = Vec::new();

    let mut prev = Vec2::new(X_START, curve.eval(X_START, time));
    let mut x = X_START + X_STEP;
    while x <= X_END {
        let curr = Vec2::new(x, curve.eval(x, time));
        segments.push(view.segment(prev, curr));
        prev = curr;
        x += X_STEP;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_shapes() {
        assert_eq!(Curve::Parabola.eval(3.0, 0.0), 9.0);
        assert_eq!(Curve::Cubic.eval(-2.0, 0.0), -8.0);
        assert!((Curve::Exp2.eval(3.0, 0.0) - 8.0).abs() < 1e-4);
        assert!(Curve::Sine.eval(0.0, 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_traveling_sine_moves_with_time() {
        let at_zero = Curve::TravelingSine.eval(1.0, 0.0);
        let later = Curve::TravelingSine.eval(1.0, 0.5);
        assert!((at_zero - later).abs() > 1e-3);
        // Time-independent curves ignore t entirely
        assert_eq!(Curve::Sine.eval(1.0, 0.0), Curve::Sine.eval(1.0, 99.0));
    }

    #[test]
    fn test_sample_is_a_connected_polyline() {
        let view = GraphView::default();
        let segments = sample(&view, Curve::Sine, 0.0);

        // One segment per step across the window, give or take float
        // accumulation on the last step
        let expected = ((X_END - X_START) / X_STEP) as usize;
        assert!(segments.len() >= expected - 2 && segments.len() <= expected + 1);

        for pair in segments.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }

        let first_world_x = (segments[0].from.x - view.origin.x) / view.scale;
        assert!((first_world_x - X_START).abs() < 1e-3);
    }
}
