//! Pixel-space camera: origin at the top-left, +y down

use glam::{Mat4, Vec2};

pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Orthographic projection mapping `(0, 0)..(width, height)` pixels to clip space
    pub fn pixels(width: f32, height: f32) -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0),
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Clip-space position of a pixel
    pub fn project(&self, point: Vec2) -> Vec2 {
        self.view_proj().project_point3(point.extend(0.0)).truncate()
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_corners_map_to_clip_space() {
        let camera = Camera::pixels(1280.0, 720.0);
        assert!(close(camera.project(Vec2::ZERO), Vec2::new(-1.0, 1.0)));
        assert!(close(camera.project(Vec2::new(1280.0, 720.0)), Vec2::new(1.0, -1.0)));
        assert!(close(camera.project(Vec2::new(640.0, 360.0)), Vec2::ZERO));
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
