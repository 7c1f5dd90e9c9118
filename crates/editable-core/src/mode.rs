//! Editing modes.
//!
//! The mode decides how content is read back out of the element, how the
//! resulting value is escaped, and which keystrokes are accepted.

use serde::{Deserialize, Serialize};

/// How the widget interprets and produces its value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Mode {
    /// Content is read as markup, entity-decoded, and stored escaped.
    #[default]
    Html,
    /// Content is read as rendered text and stored verbatim.
    PlainText,
    /// Like `PlainText`, but only ASCII digits survive.
    Numeric,
}

impl Mode {
    /// Resolve a host-supplied mode name.
    ///
    /// Unknown names fall back to `PlainText`.
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "html" => Mode::Html,
            "plain-text" | "plain" | "text" => Mode::PlainText,
            "numeric" | "number" => Mode::Numeric,
            other => {
                tracing::debug!(mode = other, "unrecognized mode, using plain-text");
                Mode::PlainText
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Html => "html",
            Mode::PlainText => "plain-text",
            Mode::Numeric => "numeric",
        }
    }

    pub fn is_markup(self) -> bool {
        matches!(self, Mode::Html)
    }
}

impl From<String> for Mode {
    fn from(s: String) -> Self {
        Mode::parse(&s)
    }
}

impl From<&str> for Mode {
    fn from(s: &str) -> Self {
        Mode::parse(s)
    }
}

impl From<Mode> for &'static str {
    fn from(mode: Mode) -> Self {
        mode.as_str()
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
