//! WASM browser tests for editable-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use editable_browser::{
    ContentEditable, DomSurface, EditableConfig, EditableSurface, Mode, NotificationHandler,
    NotificationKind, Selection, Synchronizer, cursor,
};

fn make_element() -> web_sys::HtmlElement {
    let element: web_sys::HtmlElement = gloo_utils::document()
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    gloo_utils::body().append_child(&element).unwrap();
    element
}

fn recorder() -> (NotificationHandler, Rc<RefCell<Vec<(NotificationKind, String)>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    let handler: NotificationHandler = Rc::new(move |kind, value: &str, _event| {
        sink.borrow_mut().push((kind, value.to_string()));
    });
    (handler, log)
}

fn select_text(element: &web_sys::HtmlElement, start: u32, end: u32) {
    let document = gloo_utils::document();
    let node = element.first_child().unwrap();
    let range = document.create_range().unwrap();
    range.set_start(&node, start).unwrap();
    range.set_end(&node, end).unwrap();
    let selection = gloo_utils::window().get_selection().unwrap().unwrap();
    selection.remove_all_ranges().unwrap();
    selection.add_range(&range).unwrap();
}

// === Surface tests ===

#[wasm_bindgen_test]
fn test_decode_markup_uses_inert_parser() {
    let surface = DomSurface::new(make_element());
    assert_eq!(
        surface.decode_markup("a &lt; b <b>c</b><img src=x onerror=alert(1)>"),
        "a < b c"
    );
}

#[wasm_bindgen_test]
fn test_set_text_is_not_parsed() {
    let element = make_element();
    let mut surface = DomSurface::new(element.clone());
    surface.set_text("<b>x</b>");
    assert_eq!(element.inner_html(), "&lt;b&gt;x&lt;/b&gt;");
    assert_eq!(surface.rendered_text().as_deref(), Some("<b>x</b>"));
}

#[wasm_bindgen_test]
fn test_detached_element_reads_nothing() {
    let element: web_sys::HtmlElement = gloo_utils::document()
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    let surface = DomSurface::new(element);
    assert!(!surface.is_mounted());
    assert_eq!(surface.inner_markup(), None);
}

#[wasm_bindgen_test]
fn test_selection_offsets() {
    let element = make_element();
    element.set_text_content(Some("hello"));
    select_text(&element, 2, 4);
    assert_eq!(cursor::selection_offsets(&element), Some(Selection::new(2, 4)));
}

// === Synchronizer over the DOM ===

#[wasm_bindgen_test]
fn test_paste_truncates_into_selection() {
    let element = make_element();
    let config = EditableConfig::default()
        .with_mode(Mode::PlainText)
        .with_max_length(6);
    let mut sync = Synchronizer::new(config, DomSurface::new(element.clone())).with_value("hello");
    sync.mount();
    select_text(&element, 2, 4);

    let outcome = sync.handle_paste("XYZXYZ");

    assert!(outcome.prevented);
    assert_eq!(element.text_content().as_deref(), Some("heXYZo"));
    assert_eq!(sync.value().as_str(), "heXYZo");
}

#[wasm_bindgen_test]
fn test_html_pull_escapes_value() {
    let element = make_element();
    let mut sync = Synchronizer::new(EditableConfig::default(), DomSurface::new(element.clone()));
    sync.mount();
    element.set_text_content(Some("a < b & c"));

    sync.pull_value_from_dom();
    assert_eq!(sync.value().as_str(), "a &lt; b &amp; c");
}

// === Widget lifecycle ===

#[wasm_bindgen_test]
fn test_create_pushes_value_and_attributes() {
    let element = make_element();
    let (handler, _log) = recorder();
    let mut config = EditableConfig::default().with_mode(Mode::PlainText);
    config.placeholder = Some("Type here".into());

    let widget = ContentEditable::create(element.clone(), config, Some("hello".into()), handler);

    assert_eq!(element.text_content().as_deref(), Some("hello"));
    assert_eq!(
        element.get_attribute("contenteditable").as_deref(),
        Some("true")
    );
    assert_eq!(
        element.get_attribute("placeholder").as_deref(),
        Some("Type here")
    );
    assert!(element.class_list().contains("content-editable"));
    assert_eq!(widget.value(), "hello");
}

#[wasm_bindgen_test]
fn test_html_value_is_pushed_as_text() {
    let element = make_element();
    let (handler, _log) = recorder();
    let widget = ContentEditable::create(
        element.clone(),
        EditableConfig::default(),
        Some("x &lt; y".into()),
        handler,
    );
    assert_eq!(element.text_content().as_deref(), Some("x < y"));
    assert_eq!(widget.value(), "x &lt; y");
}

#[wasm_bindgen_test]
fn test_html_value_with_bare_lt_keeps_its_tail() {
    let element = make_element();
    let (handler, _log) = recorder();
    let _widget = ContentEditable::create(
        element.clone(),
        EditableConfig::default(),
        Some("if a<b then c".into()),
        handler,
    );
    assert_eq!(element.text_content().as_deref(), Some("if a<b then c"));
}

#[wasm_bindgen_test]
fn test_autofocus_reports_focus_in() {
    let element = make_element();
    let (handler, log) = recorder();
    let _widget = ContentEditable::create(
        element.clone(),
        EditableConfig::default().with_autofocus(true),
        None,
        handler,
    );

    let focused = gloo_utils::document()
        .active_element()
        .is_some_and(|active| active == *element);
    // A headless page without window focus may not move focus at all.
    if focused {
        assert!(
            log.borrow()
                .iter()
                .any(|(kind, _)| *kind == NotificationKind::FocusIn)
        );
    }
}

#[wasm_bindgen_test]
fn test_update_config_toggles_editability() {
    let element = make_element();
    let (handler, _log) = recorder();
    let widget = ContentEditable::create(element.clone(), EditableConfig::default(), None, handler);

    widget.update_config(EditableConfig::default().with_disabled(true));
    assert_eq!(
        element.get_attribute("contenteditable").as_deref(),
        Some("false")
    );
    assert!(element.has_attribute("disabled"));
}

#[wasm_bindgen_test]
fn test_set_value_pushes() {
    let element = make_element();
    let (handler, _log) = recorder();
    let widget = ContentEditable::create(
        element.clone(),
        EditableConfig::default().with_mode(Mode::PlainText),
        None,
        handler,
    );
    widget.set_value("from host");
    assert_eq!(element.text_content().as_deref(), Some("from host"));
}

#[wasm_bindgen_test]
fn test_pointer_events_are_forwarded() {
    let element = make_element();
    let (handler, log) = recorder();
    let _widget = ContentEditable::create(
        element.clone(),
        EditableConfig::default().with_readonly(true),
        None,
        handler,
    );

    let event = web_sys::Event::new("mouseenter").unwrap();
    element.dispatch_event(&event).unwrap();

    assert!(
        log.borrow()
            .iter()
            .any(|(kind, _)| *kind == NotificationKind::MouseEnter)
    );
}

#[wasm_bindgen_test]
fn test_dispose_removes_listeners() {
    let element = make_element();
    let (handler, log) = recorder();
    let mut widget =
        ContentEditable::create(element.clone(), EditableConfig::default(), None, handler);

    widget.dispose();
    widget.dispose();
    assert!(widget.is_disposed());

    let event = web_sys::Event::new("mouseleave").unwrap();
    element.dispatch_event(&event).unwrap();
    assert!(
        !log.borrow()
            .iter()
            .any(|(kind, _)| *kind == NotificationKind::MouseLeave)
    );
}

#[wasm_bindgen_test]
async fn test_initial_pull_reports_normalized_value() {
    let element = make_element();
    let (handler, log) = recorder();
    let config = EditableConfig::default()
        .with_mode(Mode::PlainText)
        .with_allow_newlines(false);
    let widget = ContentEditable::create(element, config, Some("a\nb".into()), handler);

    // Let the deferred pull run.
    wasm_bindgen_futures::JsFuture::from(js_sys::Promise::resolve(&wasm_bindgen::JsValue::NULL))
        .await
        .unwrap();

    assert_eq!(widget.value(), "a b");
    assert!(
        log.borrow()
            .iter()
            .any(|(kind, value)| *kind == NotificationKind::ValueChanged && value == "a b")
    );
}
