//! Widget lifecycle and listener registration.
//!
//! `ContentEditable` owns the synchronizer for one element and the DOM
//! listeners that feed it. Listeners are explicit registrations held in
//! the widget; dropping or disposing the widget removes them before any
//! queued event can reach a detached instance.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;

use editable_core::{
    BoundValue, EditableConfig, EventOutcome, Interpolator, NotificationKind, Synchronizer,
};

use crate::clipboard::clipboard_text;
use crate::events::{KeyPhase, key_input};
use crate::surface::DomSurface;

/// Receives widget notifications with the current value and the raw event.
///
/// The event is `None` for the deferred pull that follows mounting.
pub type NotificationHandler = Rc<dyn Fn(NotificationKind, &str, Option<&web_sys::Event>)>;

type Shared = Rc<RefCell<Synchronizer<DomSurface>>>;

/// An element turned into an editable, value-bound text surface.
pub struct ContentEditable {
    sync: Shared,
    handler: NotificationHandler,
    listeners: Vec<EventListener>,
}

impl ContentEditable {
    /// Mount a widget on `element`.
    ///
    /// Pushes `value` into the element, reflects attributes, registers
    /// listeners, applies autofocus and schedules one pull on the next
    /// microtask so the host sees the normalized value.
    pub fn create(
        element: web_sys::HtmlElement,
        config: EditableConfig,
        value: Option<String>,
        handler: NotificationHandler,
    ) -> Self {
        let mode = config.mode;
        let mut sync = Synchronizer::new(config, DomSurface::new(element.clone()));
        if let Some(value) = value {
            sync = sync.with_value(BoundValue::from_host(mode, value));
        }
        let sync: Shared = Rc::new(RefCell::new(sync));

        let widget = Self {
            listeners: register_listeners(&element, &sync, &handler),
            sync,
            handler,
        };
        let attached = widget.sync.borrow_mut().attach();
        if attached && widget.sync.borrow().config().autofocus {
            // Outside the borrow, so the focusin listener sees the synchronizer.
            if let Err(e) = element.focus() {
                tracing::warn!("autofocus failed: {:?}", e);
            }
        }
        widget.schedule_initial_pull();
        tracing::debug!(mode = %mode, "content editable mounted");
        widget
    }

    /// The bound value as the host sees it.
    pub fn value(&self) -> String {
        self.sync.borrow().value().as_str().to_string()
    }

    /// Host write of the bound value. Pushes into the element.
    pub fn set_value(&self, value: impl Into<String>) {
        self.sync.borrow_mut().set_host_value(value);
    }

    pub fn config(&self) -> EditableConfig {
        self.sync.borrow().config().clone()
    }

    pub fn update_config(&self, config: EditableConfig) {
        self.sync.borrow_mut().update_config(config);
    }

    pub fn set_interpolator(&self, interpolator: Option<Interpolator>) {
        self.sync.borrow_mut().set_interpolator(interpolator);
    }

    pub fn is_disposed(&self) -> bool {
        self.listeners.is_empty() && !self.sync.borrow().is_mounted()
    }

    /// Remove all listeners and detach. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.listeners.clear();
        if let Ok(mut sync) = self.sync.try_borrow_mut() {
            sync.unmount();
        }
    }

    fn schedule_initial_pull(&self) {
        let weak: Weak<RefCell<Synchronizer<DomSurface>>> = Rc::downgrade(&self.sync);
        let handler = self.handler.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let Some(sync) = weak.upgrade() else {
                return;
            };
            let outcome = match sync.try_borrow_mut() {
                Ok(mut inner) => inner.pull_value_from_dom(),
                Err(_) => return,
            };
            dispatch(&sync, &handler, outcome, None);
        });
    }
}

impl Drop for ContentEditable {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Deliver an outcome: prevent the default action, then notify.
///
/// Runs with the synchronizer unborrowed so handlers may re-enter it.
fn dispatch(
    sync: &Shared,
    handler: &NotificationHandler,
    outcome: EventOutcome,
    event: Option<&web_sys::Event>,
) {
    if outcome.prevented {
        if let Some(event) = event {
            event.prevent_default();
        }
    }
    for kind in outcome.notifications {
        let value = match sync.try_borrow() {
            Ok(inner) => inner.value().as_str().to_string(),
            Err(_) => continue,
        };
        handler(kind, &value, event);
    }
}

fn register_listeners(
    element: &web_sys::HtmlElement,
    sync: &Shared,
    handler: &NotificationHandler,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(8);

    for phase in [KeyPhase::Down, KeyPhase::Press, KeyPhase::Up] {
        listeners.push(listen(element, phase.event_type(), sync, handler, move |s, event| {
            let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return EventOutcome::pass();
            };
            let key = key_input(key_event, phase);
            match phase {
                KeyPhase::Down => s.handle_key_down(&key),
                KeyPhase::Press => s.handle_key_press(&key),
                KeyPhase::Up => s.handle_key_up(&key),
            }
        }));
    }

    listeners.push(listen(element, "paste", sync, handler, |s, event| {
        match event.dyn_ref::<web_sys::ClipboardEvent>() {
            Some(clipboard_event) => s.handle_paste(&clipboard_text(clipboard_event)),
            None => s.handle_paste(""),
        }
    }));

    listeners.push(listen(element, "focusin", sync, handler, |s, _| {
        s.handle_focus_in()
    }));
    listeners.push(listen(element, "focusout", sync, handler, |s, _| {
        s.handle_focus_out()
    }));
    listeners.push(listen(element, "mouseenter", sync, handler, |s, _| {
        s.handle_mouse_enter()
    }));
    listeners.push(listen(element, "mouseleave", sync, handler, |s, _| {
        s.handle_mouse_leave()
    }));

    listeners
}

fn listen<F>(
    element: &web_sys::HtmlElement,
    event_type: &'static str,
    sync: &Shared,
    handler: &NotificationHandler,
    on_event: F,
) -> EventListener
where
    F: Fn(&mut Synchronizer<DomSurface>, &web_sys::Event) -> EventOutcome + 'static,
{
    let sync = sync.clone();
    let handler = handler.clone();
    EventListener::new_with_options(
        element,
        event_type,
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            // Events fired synchronously from inside the synchronizer (focus
            // during mount) find it borrowed and are dropped.
            let outcome = match sync.try_borrow_mut() {
                Ok(mut inner) => on_event(&mut inner, event),
                Err(_) => {
                    tracing::debug!(event_type, "event during synchronizer update ignored");
                    return;
                }
            };
            tracing::trace!(event_type, prevented = outcome.prevented, "handled");
            dispatch(&sync, &handler, outcome, Some(event));
        },
    )
}
