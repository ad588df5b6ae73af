//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture or code, is represented as a `ViewCommand`.
//! Consumers construct commands and pass them to
//! [`FieldRenderEngine::execute`](super::FieldRenderEngine::execute).

use glam::Vec2;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(ViewCommand::ToggleElectricField);
/// engine.execute(ViewCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Rotate the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera by `delta` pixels of mouse movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// Return the camera to its configured initial pose.
    ResetCamera,

    // ── Field overlay ───────────────────────────────────────────────
    /// Flip visibility of the electric field arrows.
    ToggleElectricField,

    /// Show or hide the electric field arrows.
    SetElectricFieldVisible(bool),
}
