//! In-memory surface for native hosts and tests.

use crate::config::ElementAttributes;
use crate::error::SurfaceError;
use crate::markup;
use crate::pipeline;
use crate::platform::EditableSurface;
use crate::types::Selection;

/// An element modelled as a string of rendered text plus its markup.
///
/// Programmatic pushes (`set_text`) are counted so callers can assert that
/// reading the element never writes back to it. User edits go through
/// [`type_text`](Self::type_text) and friends, which are not counted.
#[derive(Clone, Debug)]
pub struct MemorySurface {
    text: String,
    markup: String,
    selection: Option<Selection>,
    mounted: bool,
    focused: bool,
    pushes: usize,
    attributes: Option<ElementAttributes>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            markup: String::new(),
            selection: None,
            mounted: true,
            focused: false,
            pushes: 0,
            attributes: None,
        }
    }

    /// A surface whose element has gone away.
    pub fn detached() -> Self {
        Self {
            mounted: false,
            ..Self::new()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Number of programmatic content writes so far.
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn attributes(&self) -> Option<&ElementAttributes> {
        self.attributes.as_ref()
    }

    pub fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }

    /// Replace the content as if the user had typed it, caret at the end.
    pub fn type_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.markup = markup::escape(text).into_owned();
        self.selection = Some(Selection::collapsed(self.text.chars().count()));
    }

    /// Replace the content with user-authored markup (e.g. a rich drop).
    pub fn type_markup(&mut self, markup: &str) {
        self.markup = markup.to_string();
        self.text = markup::decode_to_text(markup);
        self.selection = Some(Selection::collapsed(self.text.chars().count()));
    }

    pub fn select(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }
}

impl EditableSurface for MemorySurface {
    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn inner_markup(&self) -> Option<String> {
        self.mounted.then(|| self.markup.clone())
    }

    fn rendered_text(&self) -> Option<String> {
        self.mounted.then(|| self.text.clone())
    }

    fn set_text(&mut self, text: &str) {
        if !self.mounted {
            return;
        }
        self.pushes += 1;
        self.text = text.to_string();
        self.markup = markup::escape(text).into_owned();
        self.selection = None;
    }

    fn selection(&self) -> Option<Selection> {
        if !self.mounted {
            return None;
        }
        self.selection
    }

    fn replace_selection(&mut self, text: &str) -> Result<(), SurfaceError> {
        if !self.mounted {
            return Err(SurfaceError::NotMounted);
        }
        let selection = self.selection.ok_or(SurfaceError::NoSelection)?;
        let selection = selection.clamp(self.text.chars().count());

        self.text = pipeline::splice(&self.text, selection, text);
        self.markup = markup::escape(&self.text).into_owned();
        self.selection = Some(Selection::collapsed(
            selection.start() + text.chars().count(),
        ));
        Ok(())
    }

    fn apply_attributes(&mut self, attributes: &ElementAttributes) {
        self.attributes = Some(attributes.clone());
    }

    fn focus(&mut self) -> Result<(), SurfaceError> {
        if !self.mounted {
            return Err(SurfaceError::NotMounted);
        }
        self.focused = true;
        Ok(())
    }
}
