//! Camera system for the 3D field view.
//!
//! Provides an orbit camera (Z up) with rotation, panning, zoom and reset,
//! and the GPU uniform it feeds.

/// Orbit camera controller owning the GPU uniform buffer.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Spherical-coordinate orbit math, independent of the GPU.
pub mod orbit;
