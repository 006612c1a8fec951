//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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
    // Sky gradient (#e2e8f0 -> #f7fafc)
    pub const SKY_TOP: [f32; 4] = [0.886, 0.910, 0.941, 1.0];
    pub const SKY_BOTTOM: [f32; 4] = [0.969, 0.980, 0.988, 1.0];
    // rgba(203, 213, 224, 0.6)
    pub const CLOUD: [f32; 4] = [0.796, 0.835, 0.878, 0.6];
    pub const GROUND_DASH: [f32; 4] = SKY_TOP;
    // #cbd5e0
    pub const GROUND_LINE: [f32; 4] = [0.796, 0.835, 0.878, 1.0];

    // Dino (#2d5016, #4a7c20, #1a3d0a, #8b4513)
    pub const DINO_DARK: [f32; 4] = [0.176, 0.314, 0.086, 1.0];
    pub const DINO_BODY: [f32; 4] = [0.290, 0.486, 0.125, 1.0];
    pub const DINO_SPOT: [f32; 4] = [0.102, 0.239, 0.039, 1.0];
    pub const DINO_CLAW: [f32; 4] = [0.545, 0.271, 0.075, 1.0];
    pub const EYE_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    // Cactus (#38a169, #2f855a)
    pub const CACTUS: [f32; 4] = [0.220, 0.631, 0.412, 1.0];
    pub const CACTUS_SPIKE: [f32; 4] = [0.184, 0.522, 0.353, 1.0];

    // Bird (#4a5568, #f6ad55)
    pub const BIRD: [f32; 4] = [0.290, 0.333, 0.408, 1.0];
    pub const BIRD_BEAK: [f32; 4] = [0.965, 0.678, 0.333, 1.0];

    // Particles: slate dust fades out, crash burst is solid (#ef4444)
    pub const DUST: [f32; 4] = [0.290, 0.333, 0.408, 1.0];
    pub const EXPLOSION: [f32; 4] = [0.937, 0.267, 0.267, 1.0];
}
