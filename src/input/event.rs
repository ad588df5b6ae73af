/// A window-system event, reduced to what the field view reacts to.
///
/// The viewer translates winit events into these; an
/// [`InputProcessor`](super::InputProcessor) turns them into
/// [`ViewCommand`](crate::engine::ViewCommand)s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The cursor is now at this window position.
    CursorMoved {
        /// Physical pixels from the left edge.
        x: f32,
        /// Physical pixels from the top edge.
        y: f32,
    },
    /// A mouse button went down or up.
    MouseButton {
        /// The button.
        button: MouseButton,
        /// Down (`true`) or up (`false`).
        pressed: bool,
    },
    /// Wheel motion in lines; positive moves the camera closer.
    Scroll {
        /// Lines scrolled.
        delta: f32,
    },
    /// The held modifiers changed.
    ModifiersChanged {
        /// Shift is down (turns a left drag into a pan).
        shift: bool,
    },
}

/// Mouse buttons the view distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Orbits the camera (pans with shift).
    Left,
    /// Pans the camera.
    Right,
    /// Wheel click; no action.
    Middle,
    /// Back, forward and vendor buttons; no action.
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        use winit::event::MouseButton as Winit;
        match button {
            Winit::Left => Self::Left,
            Winit::Right => Self::Right,
            Winit::Middle => Self::Middle,
            Winit::Back | Winit::Forward | Winit::Other(_) => Self::Other,
        }
    }
}

#[cfg(all(test, feature = "viewer"))]
mod tests {
    use super::*;

    #[test]
    fn side_buttons_are_not_left() {
        use winit::event::MouseButton as Winit;
        assert_eq!(MouseButton::from(Winit::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(Winit::Right), MouseButton::Right);
        assert_eq!(MouseButton::from(Winit::Back), MouseButton::Other);
        assert_eq!(MouseButton::from(Winit::Forward), MouseButton::Other);
        assert_eq!(MouseButton::from(Winit::Other(8)), MouseButton::Other);
    }
}
