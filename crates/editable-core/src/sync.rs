//! DOM ↔ value synchronization.
//!
//! The synchronizer owns the bound value and decides when content flows
//! from the element into the value (`pull_value_from_dom`, after user
//! edits) and when it flows the other way (`push_value_to_dom`, after
//! programmatic writes). A write that originates from reading the element
//! happens under a [`SuppressedWrite`] guard, so it never pushes back and
//! the caret stays where the user left it.

use crate::config::EditableConfig;
use crate::events::{EventOutcome, NotificationKind};
use crate::mode::Mode;
use crate::pipeline::{self, Interpolator, KeyFilter};
use crate::platform::EditableSurface;
use crate::types::KeyInput;
use crate::value::BoundValue;

/// Re-entrancy state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncState {
    /// Value writes push to the element.
    #[default]
    Idle,
    /// A value read from the element is being committed.
    Writing,
}

/// One editable widget bound to a surface.
pub struct Synchronizer<S: EditableSurface> {
    surface: S,
    config: EditableConfig,
    value: BoundValue,
    interpolator: Option<Interpolator>,
    sync: SyncState,
    mounted: bool,
}

impl<S: EditableSurface> Synchronizer<S> {
    pub fn new(config: EditableConfig, surface: S) -> Self {
        Self {
            surface,
            config,
            value: BoundValue::default(),
            interpolator: None,
            sync: SyncState::Idle,
            mounted: false,
        }
    }

    /// Set the initial value before mounting.
    pub fn with_value(mut self, value: impl Into<BoundValue>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_interpolator(mut self, f: impl Fn(String) -> String + 'static) -> Self {
        self.interpolator = Some(Box::new(f));
        self
    }

    // === Accessors ===

    pub fn value(&self) -> &BoundValue {
        &self.value
    }

    pub fn config(&self) -> &EditableConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn sync_state(&self) -> SyncState {
        self.sync
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Replace the interpolation hook. `None` restores identity.
    pub fn set_interpolator(&mut self, interpolator: Option<Interpolator>) {
        self.interpolator = interpolator;
    }

    // === Lifecycle ===

    /// Push the initial value and apply attributes and autofocus.
    pub fn mount(&mut self) {
        if self.attach() {
            self.autofocus();
        }
    }

    /// Push the initial value and apply attributes, leaving focus alone.
    ///
    /// Returns false if the widget was already mounted. Hosts whose focus
    /// events re-enter the synchronizer call [`autofocus`](Self::autofocus)
    /// or focus the element themselves once this returns.
    pub fn attach(&mut self) -> bool {
        if self.mounted {
            tracing::debug!("mount called on an already mounted widget");
            return false;
        }
        self.mounted = true;

        self.surface.apply_attributes(&self.config.attributes());
        self.push_value_to_dom();
        true
    }

    /// Focus the element if the configuration asks for it.
    pub fn autofocus(&mut self) {
        if !self.mounted || !self.config.autofocus {
            return;
        }
        if let Err(e) = self.surface.focus() {
            tracing::warn!("autofocus failed: {e}");
        }
    }

    /// Mark the widget as detached. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        tracing::trace!("widget unmounted");
    }

    /// Apply a new configuration.
    ///
    /// Re-derives editability and attributes, then re-pushes the value
    /// unless a suppressed write is in progress.
    pub fn update_config(&mut self, config: EditableConfig) {
        if config.mode != self.config.mode {
            tracing::debug!(from = %self.config.mode, to = %config.mode, "mode changed");
        }
        self.config = config;

        if self.mounted {
            self.surface.apply_attributes(&self.config.attributes());
        }
        if self.sync == SyncState::Idle {
            self.push_value_to_dom();
        }
    }

    // === Value flow ===

    /// Write the bound value. Pushes to the element unless suppressed.
    pub fn set_value(&mut self, value: impl Into<BoundValue>) {
        self.value = value.into();
        if self.sync == SyncState::Idle {
            self.push_value_to_dom();
        }
    }

    /// Write the bound value from a host-supplied string.
    pub fn set_host_value(&mut self, value: impl Into<String>) {
        let value = BoundValue::from_host(self.config.mode, value);
        self.set_value(value);
    }

    /// Write the value into the element as text.
    pub fn push_value_to_dom(&mut self) {
        if !self.mounted || !self.surface.is_mounted() {
            tracing::trace!("push skipped, element not mounted");
            return;
        }
        let text = self.value.rendered();
        self.surface.set_text(&text);
    }

    /// Read the element's content into the bound value.
    ///
    /// Emits exactly one `ValueChanged` notification and never pushes.
    pub fn pull_value_from_dom(&mut self) -> EventOutcome {
        let Some(raw) = self.extract() else {
            tracing::trace!("pull skipped, element not mounted");
            return EventOutcome::pass();
        };
        let value = self.process(raw);
        self.commit(value)
    }

    /// Enter the suppressed state for a single write.
    ///
    /// The guard holds the only mutable borrow and exposes nothing that
    /// could start another suppression. Dropping it returns to `Idle`.
    pub fn suppress(&mut self) -> SuppressedWrite<'_, S> {
        self.sync = SyncState::Writing;
        SuppressedWrite { inner: self }
    }

    fn extract(&self) -> Option<String> {
        if !self.mounted {
            return None;
        }
        pipeline::extract(self.config.mode, &self.surface)
    }

    /// Interpolate, then normalize, then sanitize.
    ///
    /// Normalization runs last on the text so hook output obeys the
    /// newline and digit rules too.
    fn process(&self, raw: String) -> BoundValue {
        let text = match &self.interpolator {
            Some(interpolate) => interpolate(raw),
            None => raw,
        };
        let text = pipeline::normalize(self.config.mode, &text, self.config.allow_newlines);
        pipeline::sanitize(self.config.mode, BoundValue::Text(text))
    }

    fn commit(&mut self, value: BoundValue) -> EventOutcome {
        {
            let mut write = self.suppress();
            write.set_value(value);
        }
        tracing::trace!(value = %self.value, "value committed from element");
        EventOutcome::pass().notify(NotificationKind::ValueChanged)
    }

    // === Event handlers ===

    pub fn handle_key_down(&mut self, key: &KeyInput) -> EventOutcome {
        if self.config.readonly {
            return EventOutcome::prevented();
        }

        let mut outcome = EventOutcome::pass();
        if key.is_escape() {
            outcome.push(NotificationKind::Escape);
        } else if key.is_enter() {
            outcome.push(NotificationKind::Enter);
            if self.config.allow_newlines {
                outcome.push(NotificationKind::InsertNewline);
            } else {
                outcome.prevent();
                return outcome;
            }
        }

        outcome.push(NotificationKind::KeyDown);
        outcome
    }

    pub fn handle_key_press(&mut self, key: &KeyInput) -> EventOutcome {
        if self.config.readonly {
            return EventOutcome::prevented();
        }

        let current = self.extract().unwrap_or_default();
        let verdict = pipeline::filter_key_press(
            self.config.mode,
            key,
            &current,
            self.config.max_length,
            self.surface.selection(),
        );
        tracing::trace!(key = %key.key, ?verdict, "key-press filtered");

        match verdict {
            KeyFilter::Accept => EventOutcome::pass().notify(NotificationKind::KeyPress),
            KeyFilter::RejectLength => {
                EventOutcome::prevented().notify(NotificationKind::KeyPress)
            }
            KeyFilter::RejectNonDigit => EventOutcome::prevented(),
        }
    }

    pub fn handle_key_up(&mut self, _key: &KeyInput) -> EventOutcome {
        if self.config.readonly {
            return EventOutcome::prevented();
        }

        let mut outcome = self.pull_value_from_dom();
        outcome.push(NotificationKind::KeyUp);
        outcome
    }

    /// Insert clipboard text at the selection and commit the result.
    ///
    /// The browser's own paste is always prevented.
    pub fn handle_paste(&mut self, clipboard_text: &str) -> EventOutcome {
        let mut outcome = EventOutcome::prevented();
        if self.config.readonly {
            return outcome;
        }

        let Some(current) = self.extract() else {
            return outcome;
        };

        if let Some(selection) = self.surface.selection() {
            let room = pipeline::free_space(
                current.chars().count(),
                Some(selection),
                self.config.max_length,
            );
            let insert = pipeline::truncate_to_fit(clipboard_text, room);
            tracing::debug!(
                inserted = insert.chars().count(),
                dropped = clipboard_text.chars().count() - insert.chars().count(),
                "paste"
            );
            if let Err(e) = self.surface.replace_selection(insert) {
                tracing::warn!("paste insertion failed: {e}");
            }
        } else {
            tracing::debug!("paste without selection, content unchanged");
        }

        let content = self.extract().unwrap_or(current);
        let value = self.process(content);
        outcome
            .notifications
            .extend(self.commit(value).notifications);
        outcome
    }

    pub fn handle_focus_in(&mut self) -> EventOutcome {
        EventOutcome::pass().notify(NotificationKind::FocusIn)
    }

    pub fn handle_focus_out(&mut self) -> EventOutcome {
        EventOutcome::pass().notify(NotificationKind::FocusOut)
    }

    pub fn handle_mouse_enter(&mut self) -> EventOutcome {
        EventOutcome::pass().notify(NotificationKind::MouseEnter)
    }

    pub fn handle_mouse_leave(&mut self) -> EventOutcome {
        EventOutcome::pass().notify(NotificationKind::MouseLeave)
    }
}

/// Scoped suppression of DOM pushes.
///
/// Obtained from [`Synchronizer::suppress`]. Value writes made through it
/// do not reach the element.
pub struct SuppressedWrite<'a, S: EditableSurface> {
    inner: &'a mut Synchronizer<S>,
}

impl<S: EditableSurface> SuppressedWrite<'_, S> {
    /// Replace the bound value without touching the element.
    pub fn set_value(&mut self, value: impl Into<BoundValue>) {
        self.inner.value = value.into();
    }

    pub fn value(&self) -> &BoundValue {
        &self.inner.value
    }

    pub fn sync_state(&self) -> SyncState {
        self.inner.sync
    }
}

impl<S: EditableSurface> Drop for SuppressedWrite<'_, S> {
    fn drop(&mut self) {
        self.inner.sync = SyncState::Idle;
    }
}
