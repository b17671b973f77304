//! Thin helpers over `web-sys` shared by the page components.

use anyhow::{Result, anyhow};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget};

use crate::view::ViewNode;

/// Attaches context to `Result<T, JsValue>` the way `anyhow::Context` does
/// for Rust errors.
pub(crate) trait JsResultExt<T> {
    fn js_context(
        self,
        context: &'static str,
    ) -> Result<T>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn js_context(
        self,
        context: &'static str,
    ) -> Result<T> {
        self.map_err(|value| anyhow!("{context}: {}", describe(&value)))
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{value:?}"),
    }
}

pub(crate) fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("no document available"))
}

/// Unwraps a `querySelector` result. A selector the browser rejects is
/// treated as matching nothing.
pub(crate) fn select(
    found: Result<Option<Element>, JsValue>,
    selector: &str,
) -> Option<Element> {
    match found {
        Ok(element) => element,
        Err(error) => {
            warn!(selector, error = %describe(&error), "invalid selector");
            None
        }
    }
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .js_context("adding event listener")?;
    closure.forget();
    Ok(())
}

/// Creates the element tree described by `node`.
pub(crate) fn materialize(
    document: &Document,
    node: &ViewNode,
) -> Result<Element> {
    let element = document
        .create_element(node.tag())
        .js_context("creating element")?;
    for (name, value) in node.attrs() {
        element
            .set_attribute(name, value)
            .js_context("setting attribute")?;
    }
    if let Some(text) = node.text_content() {
        element.set_text_content(Some(text));
    }
    for child in node.children() {
        let child = materialize(document, child)?;
        element
            .append_child(&child)
            .js_context("appending child element")?;
    }
    Ok(element)
}

/// Installs `css` in `<head>` under `id`, replacing the contents of an
/// earlier copy instead of adding a second one.
pub(crate) fn inject_stylesheet(
    document: &Document,
    id: &str,
    css: &str,
) -> Result<()> {
    if let Some(existing) = document.get_element_by_id(id) {
        existing.set_text_content(Some(css));
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| anyhow!("document has no <head>"))?;
    let style = document
        .create_element("style")
        .js_context("creating style element")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)
        .js_context("appending stylesheet")?;
    Ok(())
}

/// Removes every descendant of `scope` matching `selector`.
pub(crate) fn remove_all(
    scope: &Element,
    selector: &str,
) -> Result<()> {
    let nodes = scope
        .query_selector_all(selector)
        .js_context("querying elements to remove")?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            element.remove();
        }
    }
    Ok(())
}
