//! CPU reference of the kernel's primary-ray generation.
//!
//! Mirrors what the compute kernel does with a [`CameraUniform`]: build a
//! camera-space direction on the image plane, then carry it to world space
//! with the view-to-world matrix.

use glam::{UVec2, Vec2, Vec3};

use crate::camera::uniform::CameraUniform;

/// A ray with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// World-space origin.
    pub origin: Vec3,
    /// Unit world-space direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction` (normalized here).
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Primary ray through a point on the image plane.
///
/// `ndc` is in `[-1, 1]` on both axes with +y up; `ndc.y = ±1` lands on the
/// top/bottom edge of the vertical field of view. `aspect` is width over
/// height.
pub fn primary_ray(cam: &CameraUniform, ndc: Vec2, aspect: f32) -> Ray {
    let view_to_world = cam.view_to_world_mat();
    let local = Vec3::new(ndc.x * aspect, ndc.y, cam.view_plane_dist);
    let direction = view_to_world.transform_vector3(local);
    let origin = Vec3::new(cam.eye[0], cam.eye[1], cam.eye[2]);
    Ray::new(origin, direction)
}

/// Primary ray through the center of a pixel (row 0 at the top).
pub fn pixel_ray(cam: &CameraUniform, pixel: UVec2, resolution: UVec2) -> Ray {
    let size = resolution.as_vec2();
    let center = pixel.as_vec2() + Vec2::splat(0.5);
    let ndc = Vec2::new(
        center.x / size.x * 2.0 - 1.0,
        1.0 - center.y / size.y * 2.0,
    );
    primary_ray(cam, ndc, size.x / size.y)
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;
    use crate::camera::Camera;

    const EPS: f32 = 1e-5;

    fn exported(cam: &mut Camera) -> CameraUniform {
        let mut buf = CameraUniform::new();
        cam.set_buffer(&mut buf);
        buf
    }

    #[test]
    fn center_ray_follows_look_at() {
        let mut cam = Camera::new(60.0);
        let ray = primary_ray(&exported(&mut cam), Vec2::ZERO, 1.0);
        assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, EPS));
        assert_eq!(ray.origin, Vec3::ZERO);
    }

    #[test]
    fn top_edge_matches_vertical_fov() {
        let mut cam = Camera::new(90.0);
        let ray = primary_ray(&exported(&mut cam), Vec2::new(0.0, 1.0), 1.0);
        let angle = ray.direction.angle_between(Vec3::NEG_Z);
        assert!((angle - 45.0_f32.to_radians()).abs() < 1e-4);
        assert!(ray.direction.y > 0.0);
    }

    #[test]
    fn rays_follow_camera_after_rotation_and_move() {
        let mut cam = Camera::with_speeds(45.0, 1.0, 1.0);
        cam.set_orientation(Vec4::ZERO, 0.0, std::f32::consts::FRAC_PI_2);
        cam.set_orientation(Vec4::new(0.0, 0.0, 3.0, 0.0), 0.0, 0.0);
        let buf = exported(&mut cam);

        let ray = primary_ray(&buf, Vec2::ZERO, 1.0);
        assert!(ray.origin.abs_diff_eq(Vec3::new(-3.0, 0.0, 0.0), EPS));
        assert!(ray.direction.abs_diff_eq(Vec3::NEG_X, EPS));

        // +ndc.x goes toward side, which now points down -Z.
        let right = primary_ray(&buf, Vec2::new(0.5, 0.0), 1.0);
        assert!(right.direction.z < 0.0);
    }

    #[test]
    fn pixel_rows_start_at_the_top() {
        let mut cam = Camera::default();
        let buf = exported(&mut cam);
        let res = UVec2::new(64, 32);
        let top = pixel_ray(&buf, UVec2::new(32, 0), res);
        let bottom = pixel_ray(&buf, UVec2::new(32, 31), res);
        assert!(top.direction.y > 0.0);
        assert!(bottom.direction.y < 0.0);

        let left = pixel_ray(&buf, UVec2::new(0, 16), res);
        assert!(left.direction.x < 0.0);
    }

    #[test]
    fn ray_at_walks_direction() {
        let ray = Ray::new(Vec3::ONE, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(ray.at(3.0), Vec3::new(1.0, 1.0, 4.0));
    }
}
