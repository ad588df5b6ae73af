//! Converts raw platform events into view commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! held buttons, modifier keys) and the key-binding map. It is the only
//! thing that sits between raw window events and the engine's
//! [`execute`](crate::engine::FieldRenderEngine::execute) method.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use crate::engine::ViewCommand;

/// Maps physical key strings to [`ViewCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyE"`, `"KeyQ"`, `"Escape"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`ViewCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Show or hide the electric field arrows.
    ToggleElectricField,
    /// Return the camera to its initial pose.
    ResetCamera,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`ViewCommand`].
    fn to_command(self) -> ViewCommand {
        match self {
            Self::ToggleElectricField => ViewCommand::ToggleElectricField,
            Self::ResetCamera => ViewCommand::ResetCamera,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyE".into(), KeyCommandTag::ToggleElectricField),
            ("KeyQ".into(), KeyCommandTag::ResetCamera),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ViewCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`ViewCommand`]s.
///
/// Left drag orbits, right drag (or shift + left drag) pans, the wheel
/// zooms.
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    mouse_pos: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    left_pressed: bool,
    /// Whether the secondary mouse button is currently held.
    right_pressed: bool,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeyBindings::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            mouse_pos: None,
            left_pressed: false,
            right_pressed: false,
            shift_pressed: false,
            key_bindings,
        }
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.left_pressed || self.right_pressed
    }

    /// Replace the key bindings (after options change).
    pub fn set_key_bindings(&mut self, key_bindings: KeyBindings) {
        self.key_bindings = key_bindings;
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                match button {
                    MouseButton::Left => self.left_pressed = pressed,
                    MouseButton::Right => self.right_pressed = pressed,
                    MouseButton::Middle | MouseButton::Other => {}
                }
                None
            }
            InputEvent::Scroll { delta } => Some(ViewCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    /// Cursor moved — compute delta, possibly produce a camera command.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewCommand> {
        let pos = Vec2::new(x, y);
        let delta = self.mouse_pos.map_or(Vec2::ZERO, |last| pos - last);
        self.mouse_pos = Some(pos);

        if delta == Vec2::ZERO {
            return None;
        }
        if self.right_pressed || (self.left_pressed && self.shift_pressed) {
            return Some(ViewCommand::PanCamera { delta });
        }
        if self.left_pressed {
            return Some(ViewCommand::RotateCamera { delta });
        }
        None
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: false,
        }
    }

    #[test]
    fn hover_without_buttons_produces_nothing() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 }),
            None
        );
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 20.0, y: 15.0 }),
            None
        );
    }

    #[test]
    fn left_drag_rotates() {
        let mut input = InputProcessor::new();
        let _ =
            input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        let _ = input.handle_event(press(MouseButton::Left));
        assert!(input.dragging());
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 13.0, y: 6.0 }),
            Some(ViewCommand::RotateCamera {
                delta: Vec2::new(3.0, -4.0)
            })
        );
        let _ = input.handle_event(release(MouseButton::Left));
        assert!(!input.dragging());
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 20.0, y: 6.0 }),
            None
        );
    }

    #[test]
    fn side_button_drag_does_nothing() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = input.handle_event(press(MouseButton::Other));
        assert!(!input.dragging());
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 8.0, y: 3.0 }),
            None
        );
        let _ = input.handle_event(release(MouseButton::Other));
    }

    #[test]
    fn right_drag_and_shift_drag_pan() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = input.handle_event(press(MouseButton::Right));
        assert!(matches!(
            input.handle_event(InputEvent::CursorMoved { x: 5.0, y: 0.0 }),
            Some(ViewCommand::PanCamera { .. })
        ));
        let _ = input.handle_event(release(MouseButton::Right));

        let _ =
            input.handle_event(InputEvent::ModifiersChanged { shift: true });
        let _ = input.handle_event(press(MouseButton::Left));
        assert!(matches!(
            input.handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 }),
            Some(ViewCommand::PanCamera { .. })
        ));
    }

    #[test]
    fn first_cursor_sample_has_no_delta() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(press(MouseButton::Left));
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 300.0, y: 200.0 }),
            None
        );
    }

    #[test]
    fn scroll_zooms() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 1.5 }),
            Some(ViewCommand::Zoom { delta: 1.5 })
        );
    }

    #[test]
    fn custom_bindings_override_defaults() {
        let mut bindings = KeyBindings::default();
        bindings.bind("KeyF", KeyCommandTag::ToggleElectricField);
        let input = InputProcessor::with_key_bindings(bindings);
        assert_eq!(
            input.handle_key_press("KeyF"),
            Some(ViewCommand::ToggleElectricField)
        );
        assert_eq!(
            input.handle_key_press("KeyE"),
            Some(ViewCommand::ToggleElectricField)
        );
        assert_eq!(input.handle_key_press("KeyX"), None);
    }

    #[test]
    fn bindings_deserialize_from_toml() {
        let bindings: KeyBindings = toml::from_str(
            r#"
[bindings]
Space = "toggle_electric_field"
Home = "reset_camera"
"#,
        )
        .unwrap();
        assert_eq!(
            bindings.lookup("Space"),
            Some(ViewCommand::ToggleElectricField)
        );
        assert_eq!(bindings.lookup("Home"), Some(ViewCommand::ResetCamera));
        assert_eq!(bindings.lookup("KeyE"), None);
    }
}
