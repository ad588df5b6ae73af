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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
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

//! Electric field of fixed point charges, evaluated on the CPU and drawn
//! in 3D with wgpu.
//!
//! The physics lives in [`field`]: Coulomb's law summed over a slice of
//! [`field::PointCharge`]s, plus the grid sampler that turns the field into
//! arrow glyphs. Everything else is the viewer around it.
//!
//! # Key entry points
//!
//! - [`field::electric_field`] / [`field::potential`] - the evaluator
//! - [`field::FieldGrid`] - the 40×40 visualization grid
//! - [`engine::FieldRenderEngine`] - GPU state, scene and input
//! - [`options::Options`] - runtime configuration (display, camera,
//!   lighting, field sampling, geometry, colors, keybindings)
//!
//! # Architecture
//!
//! [`scene::Scene`] builds CPU meshes (ground plane, charge discs, field
//! arrows) from the charges and options. The engine uploads them once and
//! draws a single forward pass per frame: lit geometry, then the arrows if
//! the field is visible.

pub mod camera;
pub mod engine;
pub mod error;
pub mod field;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{FieldRenderEngine, ViewCommand};
pub use error::EfieldError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
