//! Selection and keystroke types shared by the core and platform layers.

use std::ops::Range;

use smol_str::SmolStr;

/// Text selection with anchor and head positions.
///
/// Offsets are character offsets into the element's rendered text.
/// Anchor and head may be in any order; use `start()` and `end()` for
/// ordered bounds.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where selection started
    pub anchor: usize,
    /// Where cursor is now
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor position).
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    /// Number of selected characters.
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }

    pub fn to_range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Clamp both ends to a text of `len` characters.
    pub fn clamp(&self, len: usize) -> Self {
        Self {
            anchor: self.anchor.min(len),
            head: self.head.min(len),
        }
    }
}

/// Legacy `keyCode` for Enter.
pub const KEY_ENTER: u32 = 13;
/// Legacy `keyCode` for Escape.
pub const KEY_ESCAPE: u32 = 27;

/// A keystroke as delivered by the host.
///
/// `code` is `which || keyCode` for key-down/key-up and the character code
/// for key-press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: SmolStr,
    pub code: u32,
}

impl KeyInput {
    pub fn new(key: impl Into<SmolStr>, code: u32) -> Self {
        Self {
            key: key.into(),
            code,
        }
    }

    /// Key-press for a single character, using its code point as the code.
    pub fn char(c: char) -> Self {
        let mut buf = [0u8; 4];
        Self {
            key: SmolStr::new(c.encode_utf8(&mut buf)),
            code: c as u32,
        }
    }

    pub fn enter() -> Self {
        Self::new("Enter", KEY_ENTER)
    }

    pub fn escape() -> Self {
        Self::new("Escape", KEY_ESCAPE)
    }

    pub fn is_enter(&self) -> bool {
        self.code == KEY_ENTER
    }

    pub fn is_escape(&self) -> bool {
        self.code == KEY_ESCAPE
    }

    /// Whether the code falls in the ASCII digit range `'0'..='9'`.
    pub fn is_ascii_digit(&self) -> bool {
        (u32::from(b'0')..=u32::from(b'9')).contains(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_bounds() {
        let sel = Selection::new(5, 10);
        assert_eq!(sel.start(), 5);
        assert_eq!(sel.end(), 10);

        // Backward selection
        let sel = Selection::new(10, 5);
        assert_eq!(sel.start(), 5);
        assert_eq!(sel.end(), 10);
        assert_eq!(sel.len(), 5);
    }

    #[test]
    fn test_selection_collapsed() {
        let sel = Selection::collapsed(7);
        assert!(sel.is_collapsed());
        assert!(sel.is_empty());
        assert_eq!(sel.len(), 0);
        assert_eq!(sel.to_range(), 7..7);
    }

    #[test]
    fn test_selection_clamp() {
        assert_eq!(Selection::new(2, 40).clamp(5), Selection::new(2, 5));
    }

    #[test]
    fn test_key_digit_range() {
        assert!(KeyInput::char('0').is_ascii_digit());
        assert!(KeyInput::char('9').is_ascii_digit());
        assert!(!KeyInput::char('a').is_ascii_digit());
        assert!(!KeyInput::char(':').is_ascii_digit());
        assert!(!KeyInput::char('/').is_ascii_digit());
    }

    #[test]
    fn test_named_keys() {
        assert!(KeyInput::enter().is_enter());
        assert!(KeyInput::escape().is_escape());
        assert!(!KeyInput::char('\r').is_escape());
    }
}
