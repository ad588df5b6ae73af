//! Shared utilities for the rendering engine.
//!
//! Helpers for frame timing and color-space conversion.

/// sRGB to linear color conversion.
pub mod color;
/// Frame pacing and FPS reporting.
pub mod frame_timing;
