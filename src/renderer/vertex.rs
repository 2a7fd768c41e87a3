//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Bricks are a cyan shell with a red inset face
    pub const BRICK_SHELL: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const BRICK_FACE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    /// Graph demo
    pub const AXES: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const CURVE_PARABOLA: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const CURVE_CUBIC: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const CURVE_EXP2: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
    pub const CURVE_SINE: [f32; 4] = [1.0, 0.3, 0.2, 1.0];
    pub const CURVE_TRAVELING_SINE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
