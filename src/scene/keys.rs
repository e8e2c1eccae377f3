//! Keyboard and mouse input routing.
//!
//! This module defines [`Intent`], the discrete requests a user can make of the scene, and the
//! mapping from winit key and button events onto them. Anything unmapped is ignored.

use crate::scene::camera::CameraMove;
use winit::event::{ElementState, MouseButton};
use winit::keyboard;

/// A discrete user-triggered request, applied between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Move the camera one step.
    Camera(CameraMove),
    /// Set the boat under way.
    StartBoat,
    /// Bring the boat to a halt.
    StopBoat,
}

macro_rules! match_char_key {
    ($c:expr, {
        $($key:literal => $variant:expr),* $(,)?
    }) => {{
        match $c.to_ascii_lowercase().as_str() {
            $($key => Some($variant),)*
            _ => None,
        }
    }};
}

/// Maps a typed character to an intent. Case-insensitive.
pub fn char_to_intent(c: &str) -> Option<Intent> {
    match_char_key!(c, {
        "w" => Intent::Camera(CameraMove::Forward),
        "s" => Intent::Camera(CameraMove::Backward),
        "a" => Intent::Camera(CameraMove::Left),
        "d" => Intent::Camera(CameraMove::Right),
    })
}

/// Converts a winit [`keyboard::Key`] to an [`Intent`] if it is one of the camera keys.
pub fn winit_key_to_intent(key: &keyboard::Key) -> Option<Intent> {
    match key {
        keyboard::Key::Character(c) => char_to_intent(c.as_str()),
        _ => None,
    }
}

/// Converts a pointer-button event to a boat intent.
///
/// Only presses count: primary starts the boat, secondary stops it. Releases and other
/// buttons are ignored.
pub fn mouse_button_to_intent(button: MouseButton, state: ElementState) -> Option<Intent> {
    if state != ElementState::Pressed {
        return None;
    }
    match button {
        MouseButton::Left => Some(Intent::StartBoat),
        MouseButton::Right => Some(Intent::StopBoat),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{Key, NamedKey, SmolStr};

    #[test]
    fn test_camera_keys_any_case() {
        for (lower, upper, movement) in [
            ("w", "W", CameraMove::Forward),
            ("s", "S", CameraMove::Backward),
            ("a", "A", CameraMove::Left),
            ("d", "D", CameraMove::Right),
        ] {
            assert_eq!(char_to_intent(lower), Some(Intent::Camera(movement)));
            assert_eq!(char_to_intent(upper), Some(Intent::Camera(movement)));
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(char_to_intent("q"), None);
        assert_eq!(char_to_intent(" "), None);
        assert_eq!(winit_key_to_intent(&Key::Named(NamedKey::ArrowUp)), None);
        assert_eq!(
            winit_key_to_intent(&Key::Character(SmolStr::new("D"))),
            Some(Intent::Camera(CameraMove::Right))
        );
    }

    /// Only button presses map to intents.
    #[test]
    fn test_mouse_buttons() {
        assert_eq!(
            mouse_button_to_intent(MouseButton::Left, ElementState::Pressed),
            Some(Intent::StartBoat)
        );
        assert_eq!(
            mouse_button_to_intent(MouseButton::Right, ElementState::Pressed),
            Some(Intent::StopBoat)
        );
        assert_eq!(
            mouse_button_to_intent(MouseButton::Left, ElementState::Released),
            None
        );
        assert_eq!(
            mouse_button_to_intent(MouseButton::Middle, ElementState::Pressed),
            None
        );
    }
}
