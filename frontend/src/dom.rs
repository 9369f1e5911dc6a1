use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Resolves a single element, warning on the console instead of failing
/// when the selector is invalid or matches nothing.
pub fn safe_query_selector(selector: &str) -> Option<Element> {
    let document = document().ok()?;
    match document.query_selector(selector) {
        Ok(Some(element)) => Some(element),
        Ok(None) => {
            gloo_console::warn!(format!("Element not found: {}", selector));
            None
        }
        Err(_) => {
            gloo_console::warn!(format!("Invalid selector: {}", selector));
            None
        }
    }
}

/// Like [`safe_query_selector`] but silent, for elements that are optional.
pub fn query(selector: &str) -> Option<HtmlElement> {
    document()
        .ok()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) {
    let style = element.style();
    for (property, value) in styles {
        let _ = style.set_property(property, value);
    }
}

pub fn set_active(element: &Element, class: &str, active: bool) {
    let _ = element.class_list().toggle_with_force(class, active);
}

pub fn has_any_class(element: &Element, classes: &[String]) -> bool {
    let list = element.class_list();
    classes.iter().any(|class| list.contains(class))
}

/// The element an event was dispatched to, if it is one.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}
