use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::core::{
    DEFAULT_MOVE_SPEED, DEFAULT_ROTATION_SPEED, DEFAULT_Y_FOV,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and speed parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub y_fov: f32,
    /// Scale applied to pitch/yaw deltas.
    #[schemars(title = "Rotation Speed", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub rotation_speed: f32,
    /// Scale applied to the movement direction.
    #[schemars(title = "Movement Speed", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub move_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            y_fov: DEFAULT_Y_FOV,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            move_speed: DEFAULT_MOVE_SPEED,
        }
    }
}
