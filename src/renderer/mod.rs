//! Rendering of the field scene.
//!
//! One forward pass straight to the surface: lit geometry (ground plane,
//! charge discs) followed by unlit field arrows.

pub(crate) mod mesh_pass;
pub(crate) mod pipeline_util;
/// Pipelines and per-layer buffers for a [`Scene`](crate::scene::Scene).
pub mod scene_renderer;

pub use scene_renderer::{DrawBindGroups, SceneRenderer};
