//! The bound value and its pre-escaped markup marker.

use std::borrow::Cow;
use std::fmt;

use crate::markup;
use crate::mode::Mode;

/// Markup that has already been escaped and must not be escaped again.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SafeMarkup(String);

impl SafeMarkup {
    /// Escape literal text into safe markup.
    pub fn escape(text: &str) -> Self {
        SafeMarkup(markup::escape(text).into_owned())
    }

    /// Wrap markup the caller vouches for.
    pub fn trusted(markup: impl Into<String>) -> Self {
        SafeMarkup(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The literal text written into the element for this markup.
    ///
    /// Only entities are resolved. Anything tag-like stays as characters,
    /// since the element receives it as a text node.
    pub fn to_text(&self) -> String {
        markup::decode_entities(&self.0).into_owned()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The single logical value a widget is bound to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoundValue {
    /// Literal text.
    Text(String),
    /// Escaped markup produced in html mode.
    Markup(SafeMarkup),
}

impl Default for BoundValue {
    fn default() -> Self {
        BoundValue::Text(String::new())
    }
}

impl BoundValue {
    /// Interpret a string written by the host.
    ///
    /// In html mode the host's string is markup it received from the widget
    /// (or vouches for), so it is wrapped rather than escaped again.
    pub fn from_host(mode: Mode, value: impl Into<String>) -> Self {
        match mode {
            Mode::Html => BoundValue::Markup(SafeMarkup::trusted(value)),
            Mode::PlainText | Mode::Numeric => BoundValue::Text(value.into()),
        }
    }

    /// The string handed to the host.
    pub fn as_str(&self) -> &str {
        match self {
            BoundValue::Text(s) => s,
            BoundValue::Markup(m) => m.as_str(),
        }
    }

    /// The characters the element shows for this value.
    pub fn rendered(&self) -> Cow<'_, str> {
        match self {
            BoundValue::Text(s) => Cow::Borrowed(s),
            BoundValue::Markup(m) => Cow::Owned(m.to_text()),
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, BoundValue::Markup(_))
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    pub fn into_string(self) -> String {
        match self {
            BoundValue::Text(s) => s,
            BoundValue::Markup(m) => m.into_string(),
        }
    }
}

impl From<String> for BoundValue {
    fn from(s: String) -> Self {
        BoundValue::Text(s)
    }
}

impl From<&str> for BoundValue {
    fn from(s: &str) -> Self {
        BoundValue::Text(s.to_string())
    }
}

impl From<SafeMarkup> for BoundValue {
    fn from(m: SafeMarkup) -> Self {
        BoundValue::Markup(m)
    }
}

impl fmt::Display for BoundValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_value_renders_decoded() {
        let value = BoundValue::from(SafeMarkup::escape("a < b"));
        assert_eq!(value.as_str(), "a &lt; b");
        assert_eq!(value.rendered(), "a < b");
    }

    #[test]
    fn test_host_value_in_html_mode_is_trusted() {
        let value = BoundValue::from_host(Mode::Html, "a &lt; b");
        assert!(value.is_markup());
        assert_eq!(value.rendered(), "a < b");

        let value = BoundValue::from_host(Mode::PlainText, "a &lt; b");
        assert!(!value.is_markup());
    }

    #[test]
    fn test_host_markup_with_bare_lt_keeps_every_character() {
        let value = BoundValue::from_host(Mode::Html, "if a<b then c");
        assert_eq!(value.rendered(), "if a<b then c");

        let value = BoundValue::from_host(Mode::Html, "<b>bold</b> &amp; more");
        assert_eq!(value.rendered(), "<b>bold</b> & more");
    }

    #[test]
    fn test_text_value_renders_verbatim() {
        let value = BoundValue::from("a &lt; b");
        assert_eq!(value.as_str(), "a &lt; b");
        assert_eq!(value.rendered(), "a &lt; b");
    }
}
