//! Build the frame's vertex list from game or demo state

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::graph::{Curve, GraphDemo, GraphInput};
use crate::sim::{GameState, Rect};

/// Segments used for the ball circle fan
const BALL_SEGMENTS: u32 = 24;
/// Line width for graph axes and curves, in logical pixels
const LINE_WIDTH: f32 = 1.5;

/// Vertices for one frame of the arcade game
pub fn game_scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    // Ball (position is its center)
    vertices.extend(shapes::circle(
        state.ball.pos,
        state.ball.radius(),
        colors::BALL,
        BALL_SEGMENTS,
    ));

    // Paddle
    vertices.extend(shapes::rect(&state.paddle.rect(), colors::PADDLE));

    // Bricks: cyan shell with a red face inset by one pixel
    for brick in state.bricks.iter().filter(|b| b.alive) {
        let r = brick.rect();
        vertices.extend(shapes::rect(&r, colors::BRICK_SHELL));
        let face = Rect::new(
            r.left() + 1.0,
            r.top() + 1.0,
            r.size.x - 2.0,
            r.size.y - 2.0,
        );
        vertices.extend(shapes::rect(&face, colors::BRICK_FACE));
    }

    vertices
}

/// Vertices for one frame of the graphing demo
pub fn graph_scene(demo: &GraphDemo, input: &GraphInput) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for seg in demo.axes() {
        vertices.extend(shapes::line(seg.from, seg.to, LINE_WIDTH, colors::AXES));
    }

    for (curve, segments) in demo.curves(input) {
        let color = match curve {
            Curve::Parabola => colors::CURVE_PARABOLA,
            Curve::Cubic => colors::CURVE_CUBIC,
            Curve::Exp2 => colors::CURVE_EXP2,
            Curve::Sine => colors::CURVE_SINE,
            Curve::TravelingSine => colors::CURVE_TRAVELING_SINE,
        };
        for seg in segments {
            vertices.extend(shapes::line(seg.from, seg.to, LINE_WIDTH, color));
        }
    }

    vertices
}
