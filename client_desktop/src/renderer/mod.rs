pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use crate::camera::{Camera, CameraUniform};
use crate::draw::DrawList;
use crate::mesh::{create_circle, create_quad, Mesh};
use crate::text::GlyphFont;
use pipeline::PipelineState;
use resources::{FrameBuffers, TextCache};
use tracing::debug;
use wgpu::*;
use winit::window::Window;

const CIRCLE_SEGMENTS: u16 = 48;

pub struct Meshes {
    pub quad: Mesh,
    pub circle: Mesh,
}

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,
    /// sRGB surfaces expect linear colors; others take the sRGB values as they are
    pub linear_output: bool,

    pub pipelines: PipelineState,
    pub camera_bind_group: BindGroup,

    pub buffers: FrameBuffers,
    pub meshes: Meshes,
    pub text_cache: TextCache,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, vsync: bool) -> anyhow::Result<Self> {
        let ctx = init::init_wgpu(window, vsync).await?;
        let camera = Camera::pixels(ctx.size.0 as f32, ctx.size.1 as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipelines = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let meshes = Meshes {
            quad: Mesh::new(&ctx.device, "Quad", create_quad()),
            circle: Mesh::new(&ctx.device, "Circle", create_circle(CIRCLE_SEGMENTS)),
        };

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipelines.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        let text_cache = TextCache::new(&ctx.device);
        let linear_output = ctx.config.format.is_srgb();

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            linear_output,
            camera,
            pipelines,
            camera_bind_group,
            buffers,
            meshes,
            text_cache,
        })
    }

    /// Reconfigure the surface and camera; zero sizes (minimized) are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        debug!(width, height, "resize surface");
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);

        self.camera = Camera::pixels(width as f32, height as f32);
        let uniform = CameraUniform::from_camera(&self.camera);
        self.queue
            .write_buffer(&self.buffers.camera, 0, bytemuck::cast_slice(&[uniform]));
    }

    /// Reconfigure at the current size after the surface was lost
    pub fn reconfigure(&mut self) {
        let (width, height) = self.size;
        self.resize(width, height);
    }

    pub fn render(&mut self, list: &DrawList, font: &GlyphFont) -> Result<(), SurfaceError> {
        draw::draw_frame(self, list, font)
    }
}
