//! Platform-agnostic fly-camera input accumulator.
//!
//! The host translates its window events into [`FlyInput`] calls; once per
//! frame [`FlyInput::take_frame`] yields the movement direction and rotation
//! deltas for [`Camera::set_orientation`].

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::options::{ControlOptions, KeybindingOptions};

/// Movement keys understood by the fly camera.
///
/// Serde serializes as `snake_case` strings so key maps stay readable in
/// TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKey {
    /// Along `look_at`.
    Forward,
    /// Against `look_at`.
    Backward,
    /// Against `side`.
    Left,
    /// Along `side`.
    Right,
    /// Along `up`.
    Up,
    /// Against `up`.
    Down,
}

impl MoveKey {
    const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];

    /// Camera-space unit axis for this key.
    fn axis(self) -> Vec3 {
        match self {
            Self::Forward => Vec3::Z,
            Self::Backward => Vec3::NEG_Z,
            Self::Left => Vec3::NEG_X,
            Self::Right => Vec3::X,
            Self::Up => Vec3::Y,
            Self::Down => Vec3::NEG_Y,
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// One frame's worth of camera motion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameMotion {
    /// Camera-space movement direction (w = 0).
    pub dir: Vec4,
    /// Pitch delta in radians (positive looks up).
    pub pitch: f32,
    /// Yaw delta in radians (positive turns left).
    pub yaw: f32,
}

impl FrameMotion {
    /// Whether applying this motion would leave the camera where it is.
    pub fn is_idle(&self) -> bool {
        self.dir == Vec4::ZERO && self.pitch == 0.0 && self.yaw == 0.0
    }

    /// Feed this motion to the camera.
    pub fn apply(&self, camera: &mut Camera) {
        camera.set_orientation(self.dir, self.pitch, self.yaw);
    }
}

/// Accumulates held movement keys and mouse motion between frames.
#[derive(Debug, Clone, Default)]
pub struct FlyInput {
    held: u8,
    mouse_delta: (f32, f32),
    controls: ControlOptions,
}

impl FlyInput {
    /// Accumulator with the given control settings.
    pub fn new(controls: ControlOptions) -> Self {
        Self {
            held: 0,
            mouse_delta: (0.0, 0.0),
            controls,
        }
    }

    /// Replace the control settings (sensitivity, inversion).
    pub fn set_controls(&mut self, controls: ControlOptions) {
        self.controls = controls;
    }

    /// Record a key press or release.
    pub fn set_key(&mut self, key: MoveKey, pressed: bool) {
        if pressed {
            self.held |= key.bit();
        } else {
            self.held &= !key.bit();
        }
    }

    /// Record a key event by host key code (e.g. `"KeyW"`).
    ///
    /// Returns true if the code is bound to a movement key.
    pub fn key_event(
        &mut self,
        bindings: &KeybindingOptions,
        code: &str,
        pressed: bool,
    ) -> bool {
        match bindings.lookup(code) {
            Some(key) => {
                self.set_key(key, pressed);
                true
            }
            None => false,
        }
    }

    /// Whether a key is currently held.
    pub fn is_held(&self, key: MoveKey) -> bool {
        self.held & key.bit() != 0
    }

    /// Add relative mouse motion in pixels (+x right, +y down).
    pub fn mouse_moved(&mut self, dx: f32, dy: f32) {
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    /// Release every key and drop pending mouse motion (e.g. on focus loss).
    pub fn clear(&mut self) {
        self.held = 0;
        self.mouse_delta = (0.0, 0.0);
    }

    /// Motion for this frame; pending mouse motion is consumed, held keys
    /// stay held.
    ///
    /// The direction is normalized so diagonal movement is not faster.
    /// Opposing keys cancel out.
    pub fn take_frame(&mut self) -> FrameMotion {
        let dir: Vec3 = MoveKey::ALL
            .into_iter()
            .filter(|key| self.is_held(*key))
            .map(MoveKey::axis)
            .sum();

        let (dx, dy) = self.mouse_delta;
        self.mouse_delta = (0.0, 0.0);

        let sensitivity = self.controls.mouse_sensitivity;
        let pitch_sign = if self.controls.invert_y { 1.0 } else { -1.0 };

        FrameMotion {
            dir: dir.normalize_or_zero().extend(0.0),
            pitch: pitch_sign * dy * sensitivity,
            yaw: -dx * sensitivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn controls(sensitivity: f32, invert_y: bool) -> ControlOptions {
        ControlOptions {
            mouse_sensitivity: sensitivity,
            invert_y,
        }
    }

    #[test]
    fn idle_input_gives_idle_motion() {
        let mut input = FlyInput::default();
        assert!(input.take_frame().is_idle());
    }

    #[test]
    fn held_keys_persist_across_frames() {
        let mut input = FlyInput::default();
        input.set_key(MoveKey::Forward, true);
        assert_eq!(input.take_frame().dir, Vec4::Z);
        assert_eq!(input.take_frame().dir, Vec4::Z);

        input.set_key(MoveKey::Forward, false);
        assert!(!input.is_held(MoveKey::Forward));
        assert_eq!(input.take_frame().dir, Vec4::ZERO);
    }

    #[test]
    fn diagonal_is_normalized_and_opposites_cancel() {
        let mut input = FlyInput::default();
        input.set_key(MoveKey::Forward, true);
        input.set_key(MoveKey::Right, true);
        let dir = input.take_frame().dir;
        assert!((dir.length() - 1.0).abs() < EPS);
        assert!(dir.x > 0.0 && dir.z > 0.0);

        input.set_key(MoveKey::Left, true);
        input.set_key(MoveKey::Backward, true);
        assert_eq!(input.take_frame().dir, Vec4::ZERO);
    }

    #[test]
    fn key_codes_go_through_bindings() {
        let bindings = KeybindingOptions::default();
        let mut input = FlyInput::default();
        assert!(input.key_event(&bindings, "KeyW", true));
        assert!(input.is_held(MoveKey::Forward));
        assert!(!input.key_event(&bindings, "KeyP", true));
        assert!(input.key_event(&bindings, "KeyW", false));
        assert!(!input.is_held(MoveKey::Forward));
    }

    #[test]
    fn mouse_motion_is_consumed_once() {
        let mut input = FlyInput::new(controls(0.01, false));
        input.mouse_moved(10.0, 0.0);
        input.mouse_moved(5.0, 20.0);

        let motion = input.take_frame();
        assert!((motion.yaw - -0.15).abs() < EPS);
        assert!((motion.pitch - -0.2).abs() < EPS);
        assert!(input.take_frame().is_idle());
    }

    #[test]
    fn invert_y_flips_pitch() {
        let mut input = FlyInput::new(controls(0.01, true));
        input.mouse_moved(0.0, 20.0);
        assert!((input.take_frame().pitch - 0.2).abs() < EPS);
    }

    #[test]
    fn clear_releases_everything() {
        let mut input = FlyInput::default();
        input.set_key(MoveKey::Up, true);
        input.mouse_moved(3.0, 3.0);
        input.clear();
        assert!(input.take_frame().is_idle());
    }

    #[test]
    fn apply_drives_the_camera() {
        let mut cam = Camera::with_speeds(45.0, 1.0, 1.0);
        let mut input = FlyInput::new(controls(0.01, false));
        input.set_key(MoveKey::Forward, true);
        input.mouse_moved(-100.0, 0.0);

        let motion = input.take_frame();
        motion.apply(&mut cam);

        // Moved forward with the old basis, then turned left by 1 rad.
        assert!(cam.eye().abs_diff_eq(Vec4::new(0.0, 0.0, -1.0, 1.0), 1e-5));
        assert!(cam.look_at().x < 0.0);
        assert!(cam.is_changed());
    }
}
