use game_core::Rgb;
use glam::Vec2;
use tracing::{trace, warn};
use wgpu::*;

use super::resources::{InstanceData, TextKey};
use super::Renderer;
use crate::draw::{DrawList, Primitive};
use crate::text::GlyphFont;

/// One draw call, referencing its slot in the instance buffer
enum DrawCall {
    Rect(u32),
    Circle(u32),
    Text(TextKey, u32),
}

pub fn draw_frame(
    renderer: &mut Renderer,
    list: &DrawList,
    font: &GlyphFont,
) -> Result<(), SurfaceError> {
    let (instances, calls) = prepare(renderer, list, font);

    renderer.buffers.reserve_instances(&renderer.device, instances.len());
    if !instances.is_empty() {
        renderer.queue.write_buffer(
            &renderer.buffers.instances,
            0,
            bytemuck::cast_slice(&instances),
        );
    }

    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(clear_color(list.clear_color(), renderer.linear_output)),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_calls(renderer, &mut pass, &calls);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    let evicted = renderer.text_cache.evict_unused();
    if evicted > 0 {
        trace!(evicted, "dropped unused text textures");
    }
    Ok(())
}

/// Turn primitives into instance data, uploading any new text on the way
fn prepare(renderer: &mut Renderer, list: &DrawList, font: &GlyphFont) -> (Vec<InstanceData>, Vec<DrawCall>) {
    let linear = renderer.linear_output;
    let mut instances = Vec::with_capacity(list.len());
    let mut calls = Vec::with_capacity(list.len());

    for item in list.items() {
        let slot = instances.len() as u32;
        match item {
            Primitive::Rect { pos, size, color } => {
                instances.push(instance(*pos, *size, *color, linear));
                calls.push(DrawCall::Rect(slot));
            }
            Primitive::Circle {
                center,
                radius,
                color,
            } => {
                instances.push(instance(*center, Vec2::splat(*radius), *color, linear));
                calls.push(DrawCall::Circle(slot));
            }
            Primitive::Text {
                text,
                pos,
                size,
                color,
            } => {
                let key = TextKey::new(text, *size);
                let Some(extent) = renderer.text_cache.prepare(
                    &renderer.device,
                    &renderer.queue,
                    &renderer.pipelines.text_layout,
                    font,
                    &key,
                ) else {
                    continue; // Nothing visible
                };
                // Snap to whole pixels so glyphs stay crisp
                instances.push(instance(pos.round(), Vec2::from(extent), *color, linear));
                calls.push(DrawCall::Text(key, slot));
            }
        }
    }

    (instances, calls)
}

fn draw_calls(renderer: &Renderer, pass: &mut RenderPass<'_>, calls: &[DrawCall]) {
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));

    for call in calls {
        let (mesh, slot) = match call {
            DrawCall::Rect(slot) => {
                pass.set_pipeline(&renderer.pipelines.shape_pipeline);
                (&renderer.meshes.quad, *slot)
            }
            DrawCall::Circle(slot) => {
                pass.set_pipeline(&renderer.pipelines.shape_pipeline);
                (&renderer.meshes.circle, *slot)
            }
            DrawCall::Text(key, slot) => {
                let Some(bind_group) = renderer.text_cache.bind_group(key) else {
                    warn!(?key, "text missing from cache");
                    continue;
                };
                pass.set_pipeline(&renderer.pipelines.text_pipeline);
                pass.set_bind_group(1, bind_group, &[]);
                (&renderer.meshes.quad, *slot)
            }
        };

        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.draw_indexed(0..mesh.index_count, 0, slot..slot + 1);
    }
}

/// Instance placing a unit mesh at `pos` scaled by `scale`
pub fn instance(pos: Vec2, scale: Vec2, color: Rgb, linear: bool) -> InstanceData {
    InstanceData {
        transform: [pos.x, pos.y, scale.x, scale.y],
        tint: surface_color(color, linear),
    }
}

/// Clear color in the surface's color space
pub fn clear_color(color: Rgb, linear: bool) -> Color {
    let [r, g, b, a] = surface_color(color, linear);
    Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

/// Channels as floats, decoded from sRGB when the surface is linear
fn surface_color(color: Rgb, linear: bool) -> [f32; 4] {
    let [r, g, b, a] = color.to_f32();
    if !linear {
        return [r, g, b, a];
    }
    let decode = |c: f32| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [decode(r), decode(g), decode(b), a]
}
