//! WASM bindings for the editable content widget.
//!
//! Provides `JsContentEditable` for JavaScript/TypeScript hosts: construct
//! it on an element, read and write `value`, subscribe with `on`, and call
//! `dispose` when the element goes away.

mod types;
mod widget;

pub use types::*;
pub use widget::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // A host may have installed its own subscriber already.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}
