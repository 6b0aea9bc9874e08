//! winit bridge for Vermilion keyboard input.
//!
//! Translates the physical key identifiers winit reports into the
//! engine's [`vermilion_input::keyboard::Key`] codes.

use vermilion_input::keyboard::Key;
use winit::keyboard;

/// Translate a winit [`keyboard::KeyCode`] into an engine [`Key`].
///
/// winit identifies keys by physical position; the engine only names
/// control, whitespace/navigation, top-row digit, letter, and function
/// keys. Anything else (punctuation, modifiers, numpad) has no engine
/// counterpart and yields `None`.
pub fn map_winit_key(key: keyboard::KeyCode) -> Option<Key> {
    Some(match key {
        // Letters
        keyboard::KeyCode::KeyA => Key::A,
        keyboard::KeyCode::KeyB => Key::B,
        keyboard::KeyCode::KeyC => Key::C,
        keyboard::KeyCode::KeyD => Key::D,
        keyboard::KeyCode::KeyE => Key::E,
        keyboard::KeyCode::KeyF => Key::F,
        keyboard::KeyCode::KeyG => Key::G,
        keyboard::KeyCode::KeyH => Key::H,
        keyboard::KeyCode::KeyI => Key::I,
        keyboard::KeyCode::KeyJ => Key::J,
        keyboard::KeyCode::KeyK => Key::K,
        keyboard::KeyCode::KeyL => Key::L,
        keyboard::KeyCode::KeyM => Key::M,
        keyboard::KeyCode::KeyN => Key::N,
        keyboard::KeyCode::KeyO => Key::O,
        keyboard::KeyCode::KeyP => Key::P,
        keyboard::KeyCode::KeyQ => Key::Q,
        keyboard::KeyCode::KeyR => Key::R,
        keyboard::KeyCode::KeyS => Key::S,
        keyboard::KeyCode::KeyT => Key::T,
        keyboard::KeyCode::KeyU => Key::U,
        keyboard::KeyCode::KeyV => Key::V,
        keyboard::KeyCode::KeyW => Key::W,
        keyboard::KeyCode::KeyX => Key::X,
        keyboard::KeyCode::KeyY => Key::Y,
        keyboard::KeyCode::KeyZ => Key::Z,

        // Top-row digits
        keyboard::KeyCode::Digit0 => Key::Alpha0,
        keyboard::KeyCode::Digit1 => Key::Alpha1,
        keyboard::KeyCode::Digit2 => Key::Alpha2,
        keyboard::KeyCode::Digit3 => Key::Alpha3,
        keyboard::KeyCode::Digit4 => Key::Alpha4,
        keyboard::KeyCode::Digit5 => Key::Alpha5,
        keyboard::KeyCode::Digit6 => Key::Alpha6,
        keyboard::KeyCode::Digit7 => Key::Alpha7,
        keyboard::KeyCode::Digit8 => Key::Alpha8,
        keyboard::KeyCode::Digit9 => Key::Alpha9,

        // Function keys
        keyboard::KeyCode::F1 => Key::F1,
        keyboard::KeyCode::F2 => Key::F2,
        keyboard::KeyCode::F3 => Key::F3,
        keyboard::KeyCode::F4 => Key::F4,
        keyboard::KeyCode::F5 => Key::F5,
        keyboard::KeyCode::F6 => Key::F6,
        keyboard::KeyCode::F7 => Key::F7,
        keyboard::KeyCode::F8 => Key::F8,
        keyboard::KeyCode::F9 => Key::F9,
        keyboard::KeyCode::F10 => Key::F10,
        keyboard::KeyCode::F11 => Key::F11,
        keyboard::KeyCode::F12 => Key::F12,
        keyboard::KeyCode::F13 => Key::F13,
        keyboard::KeyCode::F14 => Key::F14,
        keyboard::KeyCode::F15 => Key::F15,
        keyboard::KeyCode::F16 => Key::F16,
        keyboard::KeyCode::F17 => Key::F17,
        keyboard::KeyCode::F18 => Key::F18,
        keyboard::KeyCode::F19 => Key::F19,
        keyboard::KeyCode::F20 => Key::F20,
        keyboard::KeyCode::F21 => Key::F21,
        keyboard::KeyCode::F22 => Key::F22,
        keyboard::KeyCode::F23 => Key::F23,
        keyboard::KeyCode::F24 => Key::F24,

        // Arrows
        keyboard::KeyCode::ArrowUp => Key::UpArrow,
        keyboard::KeyCode::ArrowDown => Key::DownArrow,
        keyboard::KeyCode::ArrowLeft => Key::LeftArrow,
        keyboard::KeyCode::ArrowRight => Key::RightArrow,

        // Common
        keyboard::KeyCode::Space => Key::Space,
        keyboard::KeyCode::Enter => Key::Return,
        keyboard::KeyCode::Escape => Key::Escape,

        other => {
            log::trace!("No engine key mapping for winit key {:?}", other);
            return None;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_letter_keys() {
        assert_eq!(map_winit_key(keyboard::KeyCode::KeyA), Some(Key::A));
        assert_eq!(map_winit_key(keyboard::KeyCode::KeyZ), Some(Key::Z));
    }

    #[test]
    fn digits_map_to_alpha_keys() {
        assert_eq!(map_winit_key(keyboard::KeyCode::Digit0), Some(Key::Alpha0));
        assert_eq!(map_winit_key(keyboard::KeyCode::Digit9), Some(Key::Alpha9));
    }

    #[test]
    fn arrows_map_to_arrow_keys() {
        assert_eq!(
            map_winit_key(keyboard::KeyCode::ArrowLeft),
            Some(Key::LeftArrow)
        );
        assert_eq!(map_winit_key(keyboard::KeyCode::ArrowUp), Some(Key::UpArrow));
    }

    #[test]
    fn function_keys_cover_the_extended_range() {
        assert_eq!(map_winit_key(keyboard::KeyCode::F1), Some(Key::F1));
        assert_eq!(map_winit_key(keyboard::KeyCode::F24), Some(Key::F24));
    }

    #[test]
    fn enter_maps_to_return() {
        assert_eq!(map_winit_key(keyboard::KeyCode::Enter), Some(Key::Return));
    }

    #[test]
    fn keys_outside_the_named_set_are_unmapped() {
        assert_eq!(map_winit_key(keyboard::KeyCode::ShiftLeft), None);
        assert_eq!(map_winit_key(keyboard::KeyCode::Numpad0), None);
        assert_eq!(map_winit_key(keyboard::KeyCode::Semicolon), None);
    }
}
