use std::collections::HashMap;

use crate::camera::{Camera, CameraUniform};
use crate::text::GlyphFont;
use tracing::trace;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

pub struct FrameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
    pub instance_capacity: usize,
}

const INITIAL_INSTANCES: usize = 64;

pub fn create_buffers(device: &Device, camera: &Camera) -> FrameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    FrameBuffers {
        camera: camera_buffer,
        instances: create_instance_buffer(device, INITIAL_INSTANCES),
        instance_capacity: INITIAL_INSTANCES,
    }
}

fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl FrameBuffers {
    /// Grow the instance buffer to hold at least `count` instances
    pub fn reserve_instances(&mut self, device: &Device, count: usize) {
        if count <= self.instance_capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        trace!(capacity, "growing instance buffer");
        self.instances = create_instance_buffer(device, capacity);
        self.instance_capacity = capacity;
    }
}

/// Cache key: the string and its pixel size
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextKey {
    text: String,
    size_bits: u32,
}

impl TextKey {
    pub fn new(text: &str, size: f32) -> Self {
        Self {
            text: text.to_string(),
            size_bits: size.to_bits(),
        }
    }

    fn size(&self) -> f32 {
        f32::from_bits(self.size_bits)
    }
}

struct TextEntry {
    _texture: Texture,
    bind_group: BindGroup,
    size: [f32; 2],
    used: bool,
}

/// Rasterized strings uploaded as coverage textures, dropped once a frame stops using them
pub struct TextCache {
    entries: HashMap<TextKey, TextEntry>,
    sampler: Sampler,
}

impl TextCache {
    pub fn new(device: &Device) -> Self {
        let sampler = device.create_sampler(&SamplerDescriptor {
            label: Some("Text Sampler"),
            address_mode_u: AddressMode::ClampToEdge,
            address_mode_v: AddressMode::ClampToEdge,
            address_mode_w: AddressMode::ClampToEdge,
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            mipmap_filter: FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            entries: HashMap::new(),
            sampler,
        }
    }

    /// Make sure `key` is uploaded; returns its pixel size, or `None` for blank text
    pub fn prepare(
        &mut self,
        device: &Device,
        queue: &Queue,
        layout: &BindGroupLayout,
        font: &GlyphFont,
        key: &TextKey,
    ) -> Option<[f32; 2]> {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.used = true;
            return Some(entry.size);
        }

        let bitmap = font.rasterize(&key.text, key.size());
        if bitmap.width == 0 || bitmap.height == 0 {
            return None;
        }

        let extent = Extent3d {
            width: bitmap.width,
            height: bitmap.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&TextureDescriptor {
            label: Some("Text Texture"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: TextureFormat::R8Unorm,
            usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: Origin3d::ZERO,
                aspect: TextureAspect::All,
            },
            &bitmap.coverage,
            TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bitmap.width),
                rows_per_image: Some(bitmap.height),
            },
            extent,
        );

        let view = texture.create_view(&TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&BindGroupDescriptor {
            label: Some("Text Bind Group"),
            layout,
            entries: &[
                BindGroupEntry {
                    binding: 0,
                    resource: BindingResource::TextureView(&view),
                },
                BindGroupEntry {
                    binding: 1,
                    resource: BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        let size = [bitmap.width as f32, bitmap.height as f32];
        trace!(text = %key.text, width = size[0], height = size[1], "uploaded text");
        self.entries.insert(
            key.clone(),
            TextEntry {
                _texture: texture,
                bind_group,
                size,
                used: true,
            },
        );
        Some(size)
    }

    pub fn bind_group(&self, key: &TextKey) -> Option<&BindGroup> {
        self.entries.get(key).map(|entry| &entry.bind_group)
    }

    /// Drop entries not drawn since the last call and reset the usage marks.
    ///
    /// Returns how many entries were dropped.
    pub fn evict_unused(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| std::mem::take(&mut entry.used));
        before - self.entries.len()
    }
}
