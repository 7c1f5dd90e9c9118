//! `EditableSurface` over a live DOM element.

use wasm_bindgen::JsCast;

use editable_core::{EditableSurface, ElementAttributes, Selection, SurfaceError, markup};

use crate::cursor;
use crate::js_error;

/// A DOM element driven by the synchronizer.
pub struct DomSurface {
    element: web_sys::HtmlElement,
    // Classes we added, so a config update can take them back off.
    applied_classes: Vec<String>,
}

impl DomSurface {
    pub fn new(element: web_sys::HtmlElement) -> Self {
        Self {
            element,
            applied_classes: Vec::new(),
        }
    }

    pub fn element(&self) -> &web_sys::HtmlElement {
        &self.element
    }

    fn set_flag(&self, name: &str, on: bool) {
        let result = if on {
            self.element.set_attribute(name, "")
        } else {
            self.element.remove_attribute(name)
        };
        if let Err(e) = result {
            tracing::warn!(attribute = name, "attribute update failed: {:?}", e);
        }
    }

    fn set_optional(&self, name: &str, value: Option<String>) {
        let result = match value {
            Some(value) => self.element.set_attribute(name, &value),
            None => self.element.remove_attribute(name),
        };
        if let Err(e) = result {
            tracing::warn!(attribute = name, "attribute update failed: {:?}", e);
        }
    }

    fn sync_classes(&mut self, classes: &[String]) {
        let list = self.element.class_list();
        for stale in self.applied_classes.iter().filter(|c| !classes.contains(c)) {
            let _ = list.remove_1(stale);
        }
        for class in classes {
            if let Err(e) = list.add_1(class) {
                tracing::warn!(class = %class, "class update failed: {:?}", e);
            }
        }
        self.applied_classes = classes.to_vec();
    }
}

impl EditableSurface for DomSurface {
    fn is_mounted(&self) -> bool {
        self.element.is_connected()
    }

    fn inner_markup(&self) -> Option<String> {
        self.is_mounted().then(|| self.element.inner_html())
    }

    fn rendered_text(&self) -> Option<String> {
        if !self.is_mounted() {
            return None;
        }
        let text = self.element.inner_text();
        if text.is_empty() {
            Some(self.element.text_content().unwrap_or_default())
        } else {
            Some(text)
        }
    }

    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn selection(&self) -> Option<Selection> {
        cursor::selection_offsets(&self.element)
    }

    fn replace_selection(&mut self, text: &str) -> Result<(), SurfaceError> {
        if self.selection().is_none() {
            return Err(SurfaceError::NoSelection);
        }
        cursor::insert_text_at_selection(text)
    }

    fn apply_attributes(&mut self, attributes: &ElementAttributes) {
        let editable = if attributes.contenteditable {
            "true"
        } else {
            "false"
        };
        if let Err(e) = self.element.set_attribute("contenteditable", editable) {
            tracing::warn!("contenteditable update failed: {:?}", e);
        }

        self.set_optional("placeholder", attributes.placeholder.clone());
        self.set_optional("spellcheck", attributes.spellcheck.map(|s| s.to_string()));
        self.set_optional("tabindex", attributes.tabindex.map(|t| t.to_string()));
        self.set_flag("readonly", attributes.readonly);
        self.set_flag("disabled", attributes.disabled);
        self.sync_classes(&attributes.classes);
    }

    fn focus(&mut self) -> Result<(), SurfaceError> {
        self.element.focus().map_err(js_error)
    }

    /// Parse through an inert `<template>` so nothing in the markup loads or
    /// runs.
    fn decode_markup(&self, markup_str: &str) -> String {
        let template = gloo_utils::document()
            .create_element("template")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlTemplateElement>().ok());

        match template {
            Some(template) => {
                template.set_inner_html(markup_str);
                template.content().text_content().unwrap_or_default()
            }
            None => {
                tracing::debug!("template element unavailable, using portable decoder");
                markup::decode_to_text(markup_str)
            }
        }
    }
}
