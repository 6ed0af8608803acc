use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Mouse-look settings.
pub struct ControlOptions {
    /// Radians of rotation per pixel of mouse motion.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.0005, max = 0.05), extend("step" = 0.0005))]
    pub mouse_sensitivity: f32,
    /// Moving the mouse down looks up.
    #[schemars(title = "Invert Y")]
    pub invert_y: bool,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.005,
            invert_y: false,
        }
    }
}
