//! Browser DOM layer for editable widgets.
//!
//! This crate wires `editable-core` to a real element. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `surface`: `EditableSurface` over an `HtmlElement`
//! - `cursor`: Selection API handling and paste insertion
//! - `events`: keyboard event extraction
//! - `clipboard`: paste event text extraction
//! - `widget`: `ContentEditable` lifecycle and listener registration
//!
//! # Re-exports
//!
//! This crate re-exports `editable-core` for convenience, so consumers
//! only need to depend on `editable-browser`.

// Re-export core crate
pub use editable_core;
pub use editable_core::*;

pub mod clipboard;
pub mod cursor;
pub mod events;
pub mod surface;
pub mod widget;

pub use surface::DomSurface;
pub use widget::{ContentEditable, NotificationHandler};

pub(crate) fn js_error(e: wasm_bindgen::JsValue) -> SurfaceError {
    SurfaceError::Platform(format!("{e:?}"))
}
