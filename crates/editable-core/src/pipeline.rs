//! Input normalization pipeline.
//!
//! Everything here is deterministic given its inputs. The synchronizer runs
//! these stages in order on every edit:
//!
//! extract → normalize → interpolate → sanitize → commit
//!
//! Lengths and offsets are counted in characters.

use crate::mode::Mode;
use crate::platform::EditableSurface;
use crate::types::{KeyInput, Selection};
use crate::value::{BoundValue, SafeMarkup};

/// Text transform applied to every extracted value before sanitization.
pub type Interpolator = Box<dyn Fn(String) -> String>;

/// Read the element's content as literal text.
///
/// Html mode reads the inner markup and decodes it through the surface's
/// parser; the other modes read the rendered text. Returns `None` when the
/// element is not mounted.
pub fn extract<S: EditableSurface + ?Sized>(mode: Mode, surface: &S) -> Option<String> {
    if !surface.is_mounted() {
        return None;
    }
    match mode {
        Mode::Html => {
            let markup = surface.inner_markup()?;
            Some(surface.decode_markup(&markup))
        }
        Mode::PlainText | Mode::Numeric => surface.rendered_text(),
    }
}

/// Escape a value for reinsertion as markup.
///
/// Only html mode escapes, producing a `SafeMarkup` value. Values that are
/// already `SafeMarkup` pass through, so applying this twice is the same
/// as applying it once.
pub fn sanitize(mode: Mode, value: BoundValue) -> BoundValue {
    match (mode, value) {
        (Mode::Html, BoundValue::Text(text)) => BoundValue::Markup(SafeMarkup::escape(&text)),
        (_, value) => value,
    }
}

/// Whether `candidate` leaves room for another typed character.
///
/// Strict: a field at exactly `max_length` characters is full.
pub fn enforce_max_length(candidate: &str, max_length: Option<usize>) -> bool {
    match max_length {
        None => true,
        Some(max) => candidate.chars().count() < max,
    }
}

/// Verdict for a key-press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyFilter {
    Accept,
    /// The field is full and the keystroke would not replace a selection.
    RejectLength,
    /// Numeric mode and the character is not an ASCII digit.
    RejectNonDigit,
}

impl KeyFilter {
    pub fn is_accepted(self) -> bool {
        matches!(self, KeyFilter::Accept)
    }
}

/// Decide whether a key-press may reach the element.
///
/// A non-empty selection always passes the length gate because typing
/// replaces it rather than growing the text.
pub fn filter_key_press(
    mode: Mode,
    key: &KeyInput,
    current_text: &str,
    max_length: Option<usize>,
    selection: Option<Selection>,
) -> KeyFilter {
    if mode == Mode::Numeric && !key.is_ascii_digit() {
        return KeyFilter::RejectNonDigit;
    }

    let replaces_selection = selection.is_some_and(|sel| !sel.is_collapsed());
    if !enforce_max_length(current_text, max_length) && !replaces_selection {
        return KeyFilter::RejectLength;
    }

    KeyFilter::Accept
}

/// Characters a paste may insert, counting the selection it replaces.
///
/// Clamped at zero when the content already exceeds the limit.
pub fn free_space(
    current_len: usize,
    selection: Option<Selection>,
    max_length: Option<usize>,
) -> Option<usize> {
    let selected = selection.map_or(0, |sel| sel.len());
    max_length.map(|max| (max + selected).saturating_sub(current_len))
}

/// Truncate `text` to at most `limit` characters.
pub fn truncate_to_fit(text: &str, limit: Option<usize>) -> &str {
    match limit {
        None => text,
        Some(limit) => match text.char_indices().nth(limit) {
            Some((byte, _)) => &text[..byte],
            None => text,
        },
    }
}

/// Replace the selected range of `current` with `insert`.
pub fn splice(current: &str, selection: Selection, insert: &str) -> String {
    let len = current.chars().count();
    let sel = selection.clamp(len);
    let start = byte_offset(current, sel.start());
    let end = byte_offset(current, sel.end());

    let mut out = String::with_capacity(current.len() - (end - start) + insert.len());
    out.push_str(&current[..start]);
    out.push_str(insert);
    out.push_str(&current[end..]);
    out
}

fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Apply the newline and digit filters.
pub fn normalize(mode: Mode, text: &str, allow_newlines: bool) -> String {
    let text = if allow_newlines {
        text.to_string()
    } else {
        text.replace('\n', " ")
    };

    match mode {
        Mode::Numeric => text.chars().filter(char::is_ascii_digit).collect(),
        Mode::Html | Mode::PlainText => text,
    }
}

/// Compute the text a paste produces, without touching any element.
///
/// With a selection the clipboard text is truncated to the free space and
/// replaces the selected range. Without one the content is unchanged. The
/// result is normalized either way.
pub fn handle_paste(
    mode: Mode,
    clipboard_text: &str,
    current_text: &str,
    selection: Option<Selection>,
    max_length: Option<usize>,
    allow_newlines: bool,
) -> String {
    let content = match selection {
        Some(sel) => {
            let room = free_space(current_text.chars().count(), Some(sel), max_length);
            splice(current_text, sel, truncate_to_fit(clipboard_text, room))
        }
        None => current_text.to_string(),
    };
    normalize(mode, &content, allow_newlines)
}
