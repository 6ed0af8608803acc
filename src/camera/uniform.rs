use glam::{Mat4, Vec4};

/// Byte size of [`CameraUniform`] as seen by the ray-generation kernel.
pub const CAMERA_UNIFORM_SIZE: usize = 144;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU record read by the ray-generation kernel.
///
/// Field order and precision are the binary contract with the kernel:
///
/// | offset | field             |
/// |-------:|-------------------|
/// | 0      | `eye`             |
/// | 16     | `side`            |
/// | 32     | `up`              |
/// | 48     | `look_at`         |
/// | 64     | `view_plane_dist` |
/// | 80     | `view_to_world`   |
///
/// The record is owned by the host; the camera only writes into it.
pub struct CameraUniform {
    /// Camera position (w = 1).
    pub eye: [f32; 4],
    /// Side (right) basis vector (w = 0).
    pub side: [f32; 4],
    /// Up basis vector (w = 0).
    pub up: [f32; 4],
    /// Look-at basis vector (w = 0).
    pub look_at: [f32; 4],
    /// Distance from the eye to the image plane.
    pub view_plane_dist: f32,
    /// Padding so the matrix starts on a 16-byte boundary.
    pub(crate) _pad: [f32; 3],
    /// Column-major view-to-world matrix (columns `side, up, look_at, eye`).
    pub view_to_world: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Zeroed record with an identity view-to-world matrix.
    pub fn new() -> Self {
        Self {
            eye: Vec4::W.to_array(),
            side: [0.0; 4],
            up: [0.0; 4],
            look_at: [0.0; 4],
            view_plane_dist: 0.0,
            _pad: [0.0; 3],
            view_to_world: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    /// Raw bytes ready for a buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// The stored matrix as a `glam` matrix.
    pub fn view_to_world_mat(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view_to_world)
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{align_of, offset_of, size_of};

    use super::*;

    #[test]
    fn layout_matches_kernel_struct() {
        assert_eq!(size_of::<CameraUniform>(), CAMERA_UNIFORM_SIZE);
        assert_eq!(align_of::<CameraUniform>(), 4);
        assert_eq!(offset_of!(CameraUniform, eye), 0);
        assert_eq!(offset_of!(CameraUniform, side), 16);
        assert_eq!(offset_of!(CameraUniform, up), 32);
        assert_eq!(offset_of!(CameraUniform, look_at), 48);
        assert_eq!(offset_of!(CameraUniform, view_plane_dist), 64);
        assert_eq!(offset_of!(CameraUniform, view_to_world), 80);
    }

    #[test]
    fn bytes_are_native_f32() {
        let mut uniform = CameraUniform::new();
        uniform.view_plane_dist = 2.5;
        let bytes = uniform.as_bytes();
        assert_eq!(bytes.len(), CAMERA_UNIFORM_SIZE);
        assert_eq!(&bytes[64..68], &2.5_f32.to_ne_bytes());
        // eye.w
        assert_eq!(&bytes[12..16], &1.0_f32.to_ne_bytes());
    }

    #[test]
    fn matrix_is_column_major() {
        let mut uniform = CameraUniform::new();
        let m = Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::NEG_Z, Vec4::new(1.0, 2.0, 3.0, 1.0));
        uniform.view_to_world = m.to_cols_array_2d();
        assert_eq!(uniform.view_to_world[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(uniform.view_to_world_mat(), m);
    }
}
