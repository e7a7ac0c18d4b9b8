use std::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{DashboardError, Result};

pub fn js_error(value: JsValue) -> DashboardError {
    DashboardError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| DashboardError::Browser("no window".to_string()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| DashboardError::Browser("no document".to_string()))
}

pub fn body() -> Result<HtmlElement> {
    document()?
        .body()
        .ok_or_else(|| DashboardError::MissingElement("body".to_string()))
}

/// Look up a required element by id and cast it to the expected type.
pub fn element<T: JsCast>(id: &str) -> Result<T> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| DashboardError::MissingElement(id.to_string()))
}

/// All descendants of `root` matching `selector`.
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let nodes = root.query_selector_all(selector).map_err(js_error)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn set_class(element: &Element, class: &str, present: bool) {
    let classes = element.class_list();
    let result = if present {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("Could not update class {}: {:?}", class, e);
    }
}

pub fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Attach `handler` for `event` for the lifetime of the page.
pub fn listen<T, F>(target: &T, event: &str, handler: F) -> Result<()>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// Wall-clock time, for the progress animation.
pub fn now() -> Duration {
    Duration::from_millis(js_sys::Date::now() as u64)
}
