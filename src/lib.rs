// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Pinhole fly camera for a GPU compute-kernel ray tracer.
//!
//! The camera keeps a right-handed orthonormal basis (`side`, `up`,
//! `look_at`) and an `eye` position, derives the view-plane distance from a
//! vertical field of view, and exports a plain `#[repr(C)]` record that the
//! ray-generation kernel reads bit for bit.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - basis/position state and its per-frame mutators
//! - [`camera::CameraUniform`] - the GPU-facing record filled by
//!   [`camera::Camera::set_buffer`]
//! - [`camera::input::FlyInput`] - turns key/mouse events into the per-frame
//!   movement and rotation deltas
//! - [`options::Options`] - TOML presets for field of view, speeds and
//!   controls
//!
//! # Frame flow
//!
//! The host feeds input events into a `FlyInput`, applies the resulting
//! `FrameMotion` to the `Camera` (or pushes a full basis through
//! `set_view_matrix`), then calls `sync_buffer` before dispatching the kernel.
//! Uploading the record and dispatching the kernel belong to the host.

pub mod camera;
pub mod error;
pub mod options;

pub use camera::{Camera, CameraUniform};
pub use error::CameraError;
pub use options::Options;
