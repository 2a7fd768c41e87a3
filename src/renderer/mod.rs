//! WebGPU rendering module
//!
//! A single colored-triangle pipeline: `scene` turns sim/demo state into
//! a vertex list in logical screen space, `pipeline` maps it to NDC and
//! draws it.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
