//! Camera system for the ray-generation kernel.
//!
//! Provides the fly camera with its basis/position state, the GPU-facing
//! camera record, a CPU reference of primary-ray generation, and an input
//! accumulator that turns key/mouse events into per-frame motion.

/// Core camera struct and its per-frame mutators.
pub mod core;
/// Window-system-agnostic fly-camera input accumulator.
pub mod input;
/// Primary-ray generation from an exported camera record.
pub mod ray;
/// GPU record layout shared with the ray-generation kernel.
pub mod uniform;

pub use self::core::{view_plane_distance, Camera};
pub use self::uniform::CameraUniform;
