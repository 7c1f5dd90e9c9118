//! Clipboard extraction for paste events.

/// Plain text carried by a paste event.
///
/// Reads the `text` flavor from the event's DataTransfer. A missing
/// DataTransfer yields an empty string, so the paste still runs the
/// normalization step.
pub fn clipboard_text(evt: &web_sys::ClipboardEvent) -> String {
    let Some(data_transfer) = evt.clipboard_data() else {
        tracing::debug!("paste event without clipboard data");
        return String::new();
    };

    match data_transfer.get_data("text") {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("clipboard read failed: {:?}", e);
            String::new()
        }
    }
}
