//! Platform abstraction for the element a widget edits.
//!
//! The synchronizer never touches the DOM directly. It goes through an
//! `EditableSurface`, which the browser crate implements over a real
//! element and [`MemorySurface`](crate::MemorySurface) implements in memory.

use crate::config::ElementAttributes;
use crate::error::SurfaceError;
use crate::markup;
use crate::types::Selection;

/// The editable element as seen by the synchronizer.
///
/// Read methods return `None` when the element is not mounted so callers
/// can degrade to no-ops.
pub trait EditableSurface {
    /// Whether the element is attached and usable.
    fn is_mounted(&self) -> bool;

    /// The element's inner markup.
    fn inner_markup(&self) -> Option<String>;

    /// The element's rendered text.
    fn rendered_text(&self) -> Option<String>;

    /// Replace the element's content with `text`, inserted as a text node.
    fn set_text(&mut self, text: &str);

    /// The current selection inside the element, in character offsets.
    fn selection(&self) -> Option<Selection>;

    /// Delete the selected range, insert `text`, and collapse the selection
    /// to just after the inserted text.
    fn replace_selection(&mut self, text: &str) -> Result<(), SurfaceError>;

    /// Reflect derived attributes and classes onto the element.
    fn apply_attributes(&mut self, attributes: &ElementAttributes);

    fn focus(&mut self) -> Result<(), SurfaceError>;

    /// Decode a markup fragment into the literal text it renders.
    ///
    /// Platforms with a parser should override this with a detached,
    /// inert parse.
    fn decode_markup(&self, markup: &str) -> String {
        markup::decode_to_text(markup)
    }
}
