//! Widget configuration supplied by the host.

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Configuration for one editable widget.
///
/// Deserializes from the camelCase object a host passes at construction or
/// update time. Every field is optional on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditableConfig {
    /// Editing mode. `type` is accepted for older hosts.
    #[serde(alias = "type")]
    pub mode: Mode,
    /// Maximum number of characters. `None` means unlimited.
    #[serde(alias = "maxlength")]
    pub max_length: Option<usize>,
    /// When false, newlines are replaced by spaces and Enter is swallowed.
    pub allow_newlines: bool,
    pub readonly: bool,
    pub disabled: bool,
    pub autofocus: bool,

    // Attribute passthrough.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spellcheck: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabindex: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_class: Option<String>,
    pub clear_placeholder_on_focus: bool,
}

impl Default for EditableConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            max_length: None,
            allow_newlines: true,
            readonly: false,
            disabled: false,
            autofocus: false,
            placeholder: None,
            spellcheck: None,
            tabindex: None,
            extra_class: None,
            clear_placeholder_on_focus: false,
        }
    }
}

impl EditableConfig {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_allow_newlines(mut self, allow: bool) -> Self {
        self.allow_newlines = allow;
        self
    }

    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    /// Whether the element should carry `contenteditable="true"`.
    pub fn is_editable(&self) -> bool {
        !self.disabled
    }

    /// Derive the attribute set reflected onto the element.
    pub fn attributes(&self) -> ElementAttributes {
        let mut classes = vec![BASE_CLASS.to_string()];
        if let Some(extra) = self.extra_class.as_deref().filter(|c| !c.is_empty()) {
            classes.extend(extra.split_whitespace().map(str::to_string));
        }
        if self.clear_placeholder_on_focus {
            classes.push(CLEAR_ON_FOCUS_CLASS.to_string());
        }

        ElementAttributes {
            contenteditable: self.is_editable(),
            placeholder: self.placeholder.clone(),
            spellcheck: self.spellcheck,
            tabindex: self.tabindex,
            readonly: self.readonly,
            disabled: self.disabled,
            classes,
        }
    }
}

/// Class every widget element carries.
///
/// Carries no framework prefix. Hosts styling an older class name add it
/// through `extra_class`.
pub const BASE_CLASS: &str = "content-editable";

/// Class toggled by `clear_placeholder_on_focus`.
pub const CLEAR_ON_FOCUS_CLASS: &str = "clear-on-focus";

/// Attributes and classes reflected onto the element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementAttributes {
    pub contenteditable: bool,
    pub placeholder: Option<String>,
    pub spellcheck: Option<bool>,
    pub tabindex: Option<i32>,
    pub readonly: bool,
    pub disabled: bool,
    pub classes: Vec<String>,
}
