//! Selection API handling.
//!
//! Converts the browser selection into character offsets relative to the
//! widget element, and inserts text at the selection the way a paste would.

use editable_core::{Selection, SurfaceError};

use crate::js_error;

/// Read the selection inside `element` as character offsets.
///
/// Returns `None` when there is no range or the range lives outside the
/// element (e.g. the element is not focused).
pub fn selection_offsets(element: &web_sys::HtmlElement) -> Option<Selection> {
    let window = web_sys::window()?;
    let selection = window.get_selection().ok()??;
    if selection.range_count() == 0 {
        return None;
    }
    let range = selection.get_range_at(0).ok()?;

    let start_node = range.start_container().ok()?;
    let end_node = range.end_container().ok()?;
    let element_node: &web_sys::Node = element.as_ref();
    if !element_node.contains(Some(&start_node)) || !element_node.contains(Some(&end_node)) {
        tracing::trace!("selection is outside the editable element");
        return None;
    }

    let start = text_offset(element, &start_node, range.start_offset().ok()?)?;
    let end = text_offset(element, &end_node, range.end_offset().ok()?)?;
    Some(Selection::new(start, end))
}

/// Character offset of a DOM position from the start of `element`.
///
/// Measures the text of a probe range spanning from the element start to
/// the position, so nested nodes are handled without walking the tree.
pub fn text_offset(
    element: &web_sys::HtmlElement,
    node: &web_sys::Node,
    offset: u32,
) -> Option<usize> {
    let document = element.owner_document()?;
    let probe = document.create_range().ok()?;
    probe.select_node_contents(element).ok()?;
    probe.set_end(node, offset).ok()?;
    let text: String = probe.to_string().into();
    Some(text.chars().count())
}

/// Replace the current selection with a text node and park the caret after
/// it.
pub fn insert_text_at_selection(text: &str) -> Result<(), SurfaceError> {
    let window = web_sys::window().ok_or(SurfaceError::NotMounted)?;
    let selection = window
        .get_selection()
        .map_err(js_error)?
        .ok_or(SurfaceError::NoSelection)?;
    if selection.range_count() == 0 {
        return Err(SurfaceError::NoSelection);
    }
    let document = window.document().ok_or(SurfaceError::NotMounted)?;

    let range = selection.get_range_at(0).map_err(js_error)?;
    range.delete_contents().map_err(js_error)?;

    let node = document.create_text_node(text);
    range.insert_node(&node).map_err(js_error)?;

    // Collapse to the end of the inserted node, then re-anchor the start
    // there so the caret is a single point.
    range.collapse_with_to_start(false);
    let end_container = range.end_container().map_err(js_error)?;
    let end_offset = range.end_offset().map_err(js_error)?;
    range
        .set_start(&end_container, end_offset)
        .map_err(js_error)?;
    range.collapse_with_to_start(true);

    selection.remove_all_ranges().map_err(js_error)?;
    selection.add_range(&range).map_err(js_error)?;
    Ok(())
}
