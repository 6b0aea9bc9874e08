//! Key display names.
//!
//! Every named [`Key`] maps to exactly one canonical name; codes outside
//! the named set render as `"Unknown"`. The mapping is an exhaustive match
//! over compile-time data, so lookup never allocates, never fails, and is
//! safe to call from any thread without synchronization.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::Key;

impl Key {
    /// Canonical display name of this key, e.g. `"LeftArrow"` or `"F24"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Return => "Return",
            Self::Escape => "Escape",
            Self::Space => "Space",
            Self::LeftArrow => "LeftArrow",
            Self::UpArrow => "UpArrow",
            Self::RightArrow => "RightArrow",
            Self::DownArrow => "DownArrow",
            Self::Alpha0 => "Alpha0",
            Self::Alpha1 => "Alpha1",
            Self::Alpha2 => "Alpha2",
            Self::Alpha3 => "Alpha3",
            Self::Alpha4 => "Alpha4",
            Self::Alpha5 => "Alpha5",
            Self::Alpha6 => "Alpha6",
            Self::Alpha7 => "Alpha7",
            Self::Alpha8 => "Alpha8",
            Self::Alpha9 => "Alpha9",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::I => "I",
            Self::J => "J",
            Self::K => "K",
            Self::L => "L",
            Self::M => "M",
            Self::N => "N",
            Self::O => "O",
            Self::P => "P",
            Self::Q => "Q",
            Self::R => "R",
            Self::S => "S",
            Self::T => "T",
            Self::U => "U",
            Self::V => "V",
            Self::W => "W",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::F3 => "F3",
            Self::F4 => "F4",
            Self::F5 => "F5",
            Self::F6 => "F6",
            Self::F7 => "F7",
            Self::F8 => "F8",
            Self::F9 => "F9",
            Self::F10 => "F10",
            Self::F11 => "F11",
            Self::F12 => "F12",
            Self::F13 => "F13",
            Self::F14 => "F14",
            Self::F15 => "F15",
            Self::F16 => "F16",
            Self::F17 => "F17",
            Self::F18 => "F18",
            Self::F19 => "F19",
            Self::F20 => "F20",
            Self::F21 => "F21",
            Self::F22 => "F22",
            Self::F23 => "F23",
            Self::F24 => "F24",
        }
    }
}

/// Look up the display name for a raw virtual-key code.
///
/// Total over the whole `u32` domain: codes matching a named key yield
/// that key's canonical name, every other value yields `"Unknown"`.
/// Same input, same output, for the lifetime of the process.
pub const fn key_name(code: u32) -> &'static str {
    match Key::from_raw(code) {
        Some(key) => key.name(),
        None => "Unknown",
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a string that is not a known key name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown key name: {0}")]
pub struct ParseKeyError(String);

impl FromStr for Key {
    type Err = ParseKeyError;

    /// Parse a canonical key name back to its [`Key`].
    ///
    /// Matching is case-sensitive against the exact spelling returned by
    /// [`Key::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::ALL
            .iter()
            .copied()
            .find(|key| key.name() == s)
            .ok_or_else(|| ParseKeyError(s.to_owned()))
    }
}
