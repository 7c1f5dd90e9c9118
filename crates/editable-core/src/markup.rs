//! Portable markup helpers.
//!
//! Platforms with a real parser (the browser) decode markup through an inert
//! detached element instead. These functions back the default
//! [`EditableSurface::decode_markup`](crate::EditableSurface::decode_markup)
//! and the html-mode escaping step.

use std::borrow::Cow;

/// Escape text so it can be inserted as markup without changing structure.
///
/// Escapes `&`, `<`, `>`, `"` and `'`.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Resolve character entities (`&lt;`, `&#38;`, `&nbsp;` ...) to characters.
pub fn decode_entities(markup: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(markup)
}

/// Reduce a markup fragment to the literal text it renders.
///
/// Tags, comments and doctype-like declarations are dropped, then entities
/// are decoded. A `<` that cannot start a tag is kept as text, matching how
/// an HTML parser treats it.
pub fn decode_to_text(markup: &str) -> String {
    let stripped = strip_tags(markup);
    decode_entities(&stripped).into_owned()
}

fn strip_tags(markup: &str) -> Cow<'_, str> {
    if !markup.contains('<') {
        return Cow::Borrowed(markup);
    }

    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let after = &rest[lt + 1..];
        if !starts_tag(after) {
            out.push('<');
            rest = after;
            continue;
        }

        let close = if after.starts_with("!--") {
            after.find("-->").map(|i| i + 3)
        } else {
            after.find('>').map(|i| i + 1)
        };
        match close {
            Some(end) => rest = &after[end..],
            // Unterminated tag swallows the remainder, as a parser would.
            None => rest = "",
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn starts_tag(after_lt: &str) -> bool {
    match after_lt.chars().next() {
        Some(c) => c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?',
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_structural_characters() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &lt; b &amp; c"), "a < b & c");
        assert_eq!(decode_entities("&#65;&#x42;"), "AB");
    }

    #[test]
    fn test_decode_to_text_strips_tags() {
        assert_eq!(decode_to_text("<b>bold</b> text"), "bold text");
        assert_eq!(decode_to_text("one<br>two"), "onetwo");
        assert_eq!(decode_to_text("a<!-- note -->b"), "ab");
    }

    #[test]
    fn test_decode_to_text_keeps_bare_lt() {
        assert_eq!(decode_to_text("1 < 2"), "1 < 2");
        assert_eq!(decode_to_text("x <"), "x <");
    }

    #[test]
    fn test_decode_escaped_text_round_trips() {
        let text = "a < b & c > \"d\" 'e'";
        assert_eq!(decode_to_text(&escape(text)), text);
    }
}
