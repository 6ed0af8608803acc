use glam::{Mat4, Quat, Vec3, Vec4};

use crate::camera::uniform::CameraUniform;
use crate::options::CameraOptions;

/// Vertical field of view used by [`Camera::default`], in degrees.
pub const DEFAULT_Y_FOV: f32 = 45.0;
/// Rotation speed used when none is given.
pub const DEFAULT_ROTATION_SPEED: f32 = 0.25;
/// Movement speed used when none is given.
pub const DEFAULT_MOVE_SPEED: f32 = 0.3;

/// Pinhole view-plane distance for a vertical field of view in degrees.
///
/// `1 / tan(fov / 2)`: 90° gives 1.0, wider angles give a closer plane.
/// Angles approaching 0° or 180° are not rejected and yield huge or
/// near-zero distances.
#[must_use]
pub fn view_plane_distance(y_fov: f32) -> f32 {
    1.0 / (y_fov.to_radians() * 0.5).tan()
}

/// Orientation and position, kept together so the matrix is always built
/// from one consistent snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Basis {
    side: Vec4,
    up: Vec4,
    look_at: Vec4,
    eye: Vec4,
}

impl Basis {
    const IDENTITY: Self = Self {
        side: Vec4::X,
        up: Vec4::Y,
        look_at: Vec4::NEG_Z,
        eye: Vec4::W,
    };

    fn view_to_world(&self) -> Mat4 {
        Mat4::from_cols(self.side, self.up, self.look_at, self.eye)
    }

    /// Gram-Schmidt with `look_at` as the primary axis, keeping the basis
    /// right-handed (`side x up = -look_at`).
    fn orthonormalize(&mut self) {
        let look_at = self.look_at.truncate().normalize();
        let side = look_at.cross(self.up.truncate()).normalize();
        let up = side.cross(look_at);

        self.side = side.extend(0.0);
        self.up = up.extend(0.0);
        self.look_at = look_at.extend(0.0);
    }
}

/// Fly camera in a right-handed frame.
///
/// Initially `side` is +X, `up` is +Y and `look_at` is -Z, with the eye at
/// the origin. The view-to-world matrix has columns `side, up, look_at,
/// eye`, so camera-space +Z maps onto `look_at`; rays are generated in
/// camera space by the kernel and carried to world space by this matrix.
///
/// The camera does not validate its inputs. Degenerate vectors or extreme
/// fields of view propagate into the exported record and produce degenerate
/// images; validation belongs to the input or UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    basis: Basis,
    view_to_world: Mat4,
    y_fov: f32,
    view_plane_dist: f32,
    rotation_speed: f32,
    move_speed: f32,
    is_changed: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_Y_FOV)
    }
}

impl Camera {
    /// Camera with the given vertical field of view (degrees) and default
    /// speeds.
    #[must_use]
    pub fn new(y_fov: f32) -> Self {
        Self::with_speeds(y_fov, DEFAULT_ROTATION_SPEED, DEFAULT_MOVE_SPEED)
    }

    /// Camera with explicit rotation and movement speeds.
    ///
    /// Speeds are conventionally in `[0, 1]` but stored verbatim.
    #[must_use]
    pub fn with_speeds(
        y_fov: f32,
        rotation_speed: f32,
        move_speed: f32,
    ) -> Self {
        let basis = Basis::IDENTITY;
        let view_plane_dist = view_plane_distance(y_fov);
        log::debug!(
            "camera: y_fov={y_fov} view_plane_dist={view_plane_dist} \
             rotation_speed={rotation_speed} move_speed={move_speed}"
        );

        Self {
            basis,
            view_to_world: basis.view_to_world(),
            y_fov,
            view_plane_dist,
            rotation_speed,
            move_speed,
            // Nothing has been exported yet, so the first frame uploads.
            is_changed: true,
        }
    }

    /// Camera configured from an options preset.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self::with_speeds(
            options.y_fov,
            options.rotation_speed,
            options.move_speed,
        )
    }

    /// Apply one frame of movement and rotation.
    ///
    /// `dir` is expressed in camera space: x moves along `side`, y along
    /// `up` and z along `look_at`. It is scaled by the movement speed and
    /// applied with the basis as it was before this call; `dir.w` is
    /// ignored.
    ///
    /// `pitch` (radians, positive looks up) rotates `look_at` and `up`
    /// about `side`. `yaw` (radians, positive turns left) then rotates the
    /// whole basis about world +Y. Both are scaled by the rotation speed.
    /// The basis is re-orthonormalized afterwards to cancel drift.
    ///
    /// Pitch is not clamped: looking past straight up flips `up` upside
    /// down. Callers wanting a limit must enforce it themselves.
    pub fn set_orientation(&mut self, dir: Vec4, pitch: f32, yaw: f32) {
        let translation =
            self.view_to_world.transform_vector3(dir.truncate());
        self.basis.eye += translation.extend(0.0) * self.move_speed;

        let side = self.basis.side.truncate().normalize_or_zero();
        let pitch_rot =
            Quat::from_axis_angle(side, pitch * self.rotation_speed);
        let yaw_rot = Quat::from_axis_angle(Vec3::Y, yaw * self.rotation_speed);

        let look_at = yaw_rot * (pitch_rot * self.basis.look_at.truncate());
        let up = yaw_rot * (pitch_rot * self.basis.up.truncate());
        let side = yaw_rot * self.basis.side.truncate();

        self.basis.side = side.extend(0.0);
        self.basis.up = up.extend(0.0);
        self.basis.look_at = look_at.extend(0.0);
        self.basis.orthonormalize();

        self.refresh();
        log::trace!(
            "camera: set_orientation dir={dir} pitch={pitch} yaw={yaw} \
             eye={}",
            self.basis.eye
        );
    }

    /// Replace the basis and position verbatim.
    ///
    /// No normalization or orthogonality check is performed, so the exported
    /// record carries exactly these vectors.
    pub fn set_view_matrix(
        &mut self,
        side: Vec4,
        up: Vec4,
        look_at: Vec4,
        eye: Vec4,
    ) {
        self.basis = Basis {
            side,
            up,
            look_at,
            eye,
        };
        self.refresh();
        log::trace!("camera: set_view_matrix eye={eye}");
    }

    /// Write the current state into the kernel's camera record and clear the
    /// changed flag.
    ///
    /// Calling it repeatedly without a mutation in between writes identical
    /// contents.
    pub fn set_buffer(&mut self, cam_data: &mut CameraUniform) {
        cam_data.eye = self.basis.eye.to_array();
        cam_data.side = self.basis.side.to_array();
        cam_data.up = self.basis.up.to_array();
        cam_data.look_at = self.basis.look_at.to_array();
        cam_data.view_plane_dist = self.view_plane_dist;
        cam_data.view_to_world = self.view_to_world.to_cols_array_2d();
        self.is_changed = false;
        log::trace!("camera: exported record");
    }

    /// Export only if something changed since the last export.
    ///
    /// Returns true if the record was written (and needs re-uploading).
    pub fn sync_buffer(&mut self, cam_data: &mut CameraUniform) -> bool {
        if !self.is_changed {
            return false;
        }
        self.set_buffer(cam_data);
        true
    }

    /// Set the rotation speed (conventionally `[0, 1]`, not validated).
    pub fn set_rotation_speed(&mut self, rotation_speed: f32) {
        self.rotation_speed = rotation_speed;
    }

    /// Set the movement speed (conventionally `[0, 1]`, not validated).
    pub fn set_movement_speed(&mut self, move_speed: f32) {
        self.move_speed = move_speed;
    }

    fn refresh(&mut self) {
        self.view_to_world = self.basis.view_to_world();
        self.is_changed = true;
    }

    /// Side (right) basis vector.
    pub fn side(&self) -> Vec4 {
        self.basis.side
    }

    /// Up basis vector.
    pub fn up(&self) -> Vec4 {
        self.basis.up
    }

    /// Look-at (forward) basis vector.
    pub fn look_at(&self) -> Vec4 {
        self.basis.look_at
    }

    /// Eye position.
    pub fn eye(&self) -> Vec4 {
        self.basis.eye
    }

    /// Vertical field of view in degrees.
    pub fn y_fov(&self) -> f32 {
        self.y_fov
    }

    /// Distance from the eye to the image plane.
    pub fn view_plane_dist(&self) -> f32 {
        self.view_plane_dist
    }

    /// Current rotation speed.
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Current movement speed.
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// View-to-world matrix (columns `side, up, look_at, eye`).
    pub fn view_to_world(&self) -> Mat4 {
        self.view_to_world
    }

    /// Whether the state changed since the last export.
    pub fn is_changed(&self) -> bool {
        self.is_changed
    }
}
