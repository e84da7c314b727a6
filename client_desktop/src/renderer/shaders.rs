/// Instanced shapes and text quads.
///
/// Instance transform is `(x, y, scale_x, scale_y)` in pixels. Tints arrive already
/// in the surface's color space.
pub const PONG_SHADER: &str = r#"
struct Camera {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

@group(1) @binding(0)
var text_texture: texture_2d<f32>;
@group(1) @binding(1)
var text_sampler: sampler;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) uv: vec2<f32>,
};

struct InstanceInput {
    @location(2) transform: vec4<f32>,
    @location(3) tint: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) tint: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let world = instance.transform.xy + vertex.position * instance.transform.zw;

    var out: VertexOutput;
    out.clip_position = camera.view_proj * vec4<f32>(world, 0.0, 1.0);
    out.uv = vertex.uv;
    out.tint = instance.tint;
    return out;
}

@fragment
fn fs_shape(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.tint;
}

@fragment
fn fs_text(in: VertexOutput) -> @location(0) vec4<f32> {
    let coverage = textureSample(text_texture, text_sampler, in.uv).r;
    return vec4<f32>(in.tint.rgb, in.tint.a * coverage);
}
"#;
