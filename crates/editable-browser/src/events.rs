//! Browser event extraction.
//!
//! Turns raw DOM events into the platform-neutral inputs the synchronizer
//! handles.

use editable_core::KeyInput;

/// Which keyboard event a key was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Press,
    Up,
}

impl KeyPhase {
    pub fn event_type(self) -> &'static str {
        match self {
            KeyPhase::Down => "keydown",
            KeyPhase::Press => "keypress",
            KeyPhase::Up => "keyup",
        }
    }
}

/// Build a [`KeyInput`] from a keyboard event.
///
/// Key-press uses the character code, falling back to the key code;
/// key-down and key-up use the key code.
pub fn key_input(event: &web_sys::KeyboardEvent, phase: KeyPhase) -> KeyInput {
    let code = match phase {
        KeyPhase::Press => match event.char_code() {
            0 => event.key_code(),
            code => code,
        },
        KeyPhase::Down | KeyPhase::Up => event.key_code(),
    };
    KeyInput::new(event.key(), code)
}
