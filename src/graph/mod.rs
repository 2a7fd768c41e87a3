//! Function-graphing demo
//!
//! Pure like `sim`: closed-form curve sampling and a world-to-screen view,
//! emitting line segments for the renderer. No drawing happens here.

pub mod curve;
pub mod demo;
pub mod view;

pub use curve::{Curve, sample};
pub use demo::{GraphDemo, GraphInput};
pub use view::{GraphView, Segment};
