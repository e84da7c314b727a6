//! Unit meshes scaled per instance: a quad for rects and text, a disc for the ball

use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

/// Unit square from `(0, 0)` to `(1, 1)`; instance scale is the rect size
pub fn create_quad() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = vec![
        Vertex {
            position: [0.0, 0.0],
            uv: [0.0, 0.0],
        },
        Vertex {
            position: [1.0, 0.0],
            uv: [1.0, 0.0],
        },
        Vertex {
            position: [1.0, 1.0],
            uv: [1.0, 1.0],
        },
        Vertex {
            position: [0.0, 1.0],
            uv: [0.0, 1.0],
        },
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];
    (vertices, indices)
}

/// Unit disc around the origin as a triangle fan; instance scale is the radius
pub fn create_circle(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity(segments as usize + 1);
    vertices.push(Vertex {
        position: [0.0, 0.0],
        uv: [0.5, 0.5],
    });

    for i in 0..segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        let (sin, cos) = angle.sin_cos();
        vertices.push(Vertex {
            position: [cos, sin],
            uv: [0.5 + cos * 0.5, 0.5 + sin * 0.5],
        });
    }

    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        indices.push(0);
        indices.push(i + 1);
        indices.push((i + 1) % segments + 1);
    }

    (vertices, indices)
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, label: &str, (vertices, indices): (Vec<Vertex>, Vec<u16>)) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(&vertices),
            usage: BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(&indices),
            usage: BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}
