//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use editable_core::{EditableConfig, Mode};

/// Widget configuration as passed from JavaScript.
///
/// Every field is optional; omitted fields take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase", default)]
pub struct JsEditableConfig {
    /// `"html" | "plain-text" | "numeric"`. Unknown values act as plain-text.
    #[serde(alias = "type", skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_newlines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autofocus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spellcheck: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabindex: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_placeholder_on_focus: Option<bool>,
}

/// Parse a config object passed from JavaScript.
///
/// `undefined` and `null` give the defaults.
pub fn parse_config(value: JsValue) -> Result<JsEditableConfig, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(JsEditableConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))
}

impl From<JsEditableConfig> for EditableConfig {
    fn from(js: JsEditableConfig) -> Self {
        let defaults = EditableConfig::default();
        EditableConfig {
            mode: js.mode.as_deref().map_or(defaults.mode, Mode::parse),
            max_length: js.max_length.map(|m| m as usize),
            allow_newlines: js.allow_newlines.unwrap_or(defaults.allow_newlines),
            readonly: js.readonly.unwrap_or(defaults.readonly),
            disabled: js.disabled.unwrap_or(defaults.disabled),
            autofocus: js.autofocus.unwrap_or(defaults.autofocus),
            placeholder: js.placeholder,
            spellcheck: js.spellcheck,
            tabindex: js.tabindex,
            extra_class: js.extra_class,
            clear_placeholder_on_focus: js
                .clear_placeholder_on_focus
                .unwrap_or(defaults.clear_placeholder_on_focus),
        }
    }
}

impl From<&EditableConfig> for JsEditableConfig {
    fn from(config: &EditableConfig) -> Self {
        JsEditableConfig {
            mode: Some(config.mode.as_str().to_string()),
            max_length: config.max_length.map(|m| m as u32),
            allow_newlines: Some(config.allow_newlines),
            readonly: Some(config.readonly),
            disabled: Some(config.disabled),
            autofocus: Some(config.autofocus),
            placeholder: config.placeholder.clone(),
            spellcheck: config.spellcheck,
            tabindex: config.tabindex,
            extra_class: config.extra_class.clone(),
            clear_placeholder_on_focus: Some(config.clear_placeholder_on_focus),
        }
    }
}
