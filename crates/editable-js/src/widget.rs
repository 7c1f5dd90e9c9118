//! JsContentEditable - the widget wrapper for JavaScript.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use editable_browser::{ContentEditable, NotificationHandler, NotificationKind};
use editable_core::EditableConfig;

use crate::types::{JsEditableConfig, parse_config};

type Callbacks = Rc<RefCell<HashMap<NotificationKind, js_sys::Function>>>;

/// An editable element exposed to JavaScript.
///
/// Callbacks registered with `on` receive `(value, event)`; `event` is
/// `undefined` for the value change reported right after mounting.
#[wasm_bindgen]
pub struct JsContentEditable {
    inner: ContentEditable,
    callbacks: Callbacks,
}

#[wasm_bindgen]
impl JsContentEditable {
    /// Mount a widget on `element` with an initial value.
    ///
    /// `config` is a `JsEditableConfig` object or `undefined`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        element: web_sys::HtmlElement,
        config: JsValue,
        value: Option<String>,
    ) -> Result<JsContentEditable, JsError> {
        let config = parse_config(config)?;
        let callbacks: Callbacks = Rc::new(RefCell::new(HashMap::new()));
        let handler = make_handler(callbacks.clone());
        let inner = ContentEditable::create(element, config.into(), value, handler);
        Ok(Self { inner, callbacks })
    }

    // === Value property ===

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.inner.value()
    }

    #[wasm_bindgen(setter)]
    pub fn set_value(&self, value: String) {
        self.inner.set_value(value);
    }

    // === Configuration ===

    #[wasm_bindgen(getter)]
    pub fn config(&self) -> JsEditableConfig {
        JsEditableConfig::from(&self.inner.config())
    }

    #[wasm_bindgen(js_name = updateConfig)]
    pub fn update_config(&self, config: JsValue) -> Result<(), JsError> {
        let config = parse_config(config)?;
        self.inner.update_config(EditableConfig::from(config));
        Ok(())
    }

    /// Install a `(text) => text` hook run on every extracted value.
    ///
    /// Pass `undefined` to restore identity. A hook that throws or returns
    /// a non-string leaves the text unchanged.
    #[wasm_bindgen(js_name = setInterpolator)]
    pub fn set_interpolator(&self, hook: Option<js_sys::Function>) {
        let interpolator = hook.map(|f| -> editable_core::Interpolator {
            Box::new(move |text: String| {
                match f.call1(&JsValue::NULL, &JsValue::from_str(&text)) {
                    Ok(result) => result.as_string().unwrap_or(text),
                    Err(e) => {
                        tracing::warn!("interpolator threw: {:?}", e);
                        text
                    }
                }
            })
        });
        self.inner.set_interpolator(interpolator);
    }

    // === Notifications ===

    /// Register a callback for a notification such as `"key-up"` or
    /// `"enter"`. Replaces any previous callback for that name.
    pub fn on(&self, name: &str, callback: js_sys::Function) -> Result<(), JsError> {
        let kind = NotificationKind::from_name(name)
            .ok_or_else(|| JsError::new(&format!("Unknown notification: {name}")))?;
        self.callbacks.borrow_mut().insert(kind, callback);
        Ok(())
    }

    pub fn off(&self, name: &str) {
        if let Some(kind) = NotificationKind::from_name(name) {
            self.callbacks.borrow_mut().remove(&kind);
        }
    }

    // === Lifecycle ===

    /// Remove listeners and detach. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.inner.dispose();
        self.callbacks.borrow_mut().clear();
    }
}

fn make_handler(callbacks: Callbacks) -> NotificationHandler {
    Rc::new(move |kind, value: &str, event: Option<&web_sys::Event>| {
        // Clone out so the callback may call `on`/`off`.
        let Some(callback) = callbacks.borrow().get(&kind).cloned() else {
            return;
        };
        let event = event.map_or(JsValue::UNDEFINED, |e| e.clone().into());
        if let Err(e) = callback.call2(&JsValue::NULL, &JsValue::from_str(value), &event) {
            tracing::warn!(notification = kind.name(), "callback threw: {:?}", e);
        }
    })
}
