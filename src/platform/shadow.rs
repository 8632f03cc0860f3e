//! Shadow root helpers for template-backed widgets.

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, FocusOptions, HtmlElement, ShadowRoot, ShadowRootInit, ShadowRootMode};

/// Put `markup` in the host's open shadow root, creating the root on first
/// use.
pub fn instantiate(host: &Element, markup: &str) -> Result<ShadowRoot, JsValue> {
    let root = match host.shadow_root() {
        Some(root) => root,
        None => host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?,
    };
    root.set_inner_html(markup);
    Ok(root)
}

pub fn query(root: &ShadowRoot, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Toggle `display: none` while keeping the stylesheet's own value.
pub fn set_shown(element: &Element, shown: bool) {
    set_style(element, "display", if shown { "" } else { "none" });
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = element.style();
    let result = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
    if let Err(e) = result {
        tracing::debug!("Could not set {} on element: {:?}", property, e);
    }
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(e) = element.set_attribute(name, value) {
        tracing::debug!("Could not set attribute {}: {:?}", name, e);
    }
}

/// Focus without scrolling the page.
pub fn focus(element: &Element) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let options = FocusOptions::new();
        options.set_prevent_scroll(true);
        if let Err(e) = element.focus_with_options(&options) {
            tracing::debug!("Focus failed: {:?}", e);
        }
    }
}

/// Listen for `event` on an element inside a shadow root.
pub fn listen<F>(element: &Element, event: &'static str, callback: F) -> EventListener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new(element, event, callback)
}

/// Same as [`listen`] but the callback may call `prevent_default`.
pub fn listen_blocking<F>(element: &Element, event: &'static str, callback: F) -> EventListener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        element,
        event,
        EventListenerOptions::enable_prevent_default(),
        callback,
    )
}

/// Document-level keydown listener.
pub fn listen_document_keys<F>(callback: F) -> Option<EventListener>
where
    F: FnMut(&web_sys::KeyboardEvent) + 'static,
{
    let document = web_sys::window()?.document()?;
    let mut callback = callback;
    Some(EventListener::new(&document, "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
            callback(event);
        }
    }))
}
