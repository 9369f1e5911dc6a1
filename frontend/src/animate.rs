use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::dom;

/// One frame of a linear count from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub value: i64,
    pub done: bool,
}

pub fn progress_value(start: f64, end: f64, elapsed_ms: f64, duration_ms: f64) -> Frame {
    let progress = if duration_ms <= 0.0 {
        1.0
    } else {
        (elapsed_ms / duration_ms).clamp(0.0, 1.0)
    };
    let current = start + (end - start) * progress;
    Frame {
        value: current.floor() as i64,
        done: progress >= 1.0,
    }
}

/// Counts `element`'s text from `start` to `end` over `duration_ms`, one
/// step per animation frame, appending `suffix` to every value.
pub fn animate_value(
    element: &HtmlElement,
    start: f64,
    end: f64,
    duration_ms: f64,
    suffix: &str,
) -> Result<(), JsValue> {
    let window = dom::window()?;
    let started_at = window
        .performance()
        .ok_or_else(|| JsValue::from_str("performance timer unavailable"))?
        .now();

    let element = element.clone();
    let suffix = suffix.to_string();
    let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = frame_cb.clone();
    let scheduler = window.clone();

    *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let frame = progress_value(start, end, now - started_at, duration_ms);
        element.set_text_content(Some(&format!("{}{}", frame.value, suffix)));

        if frame.done {
            // Release the closure so the loop can be collected.
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(cb) = next.borrow().as_ref() {
            let _ = scheduler.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = frame_cb.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_linearly_and_floors() {
        assert_eq!(progress_value(0.0, 100.0, 0.0, 1000.0), Frame { value: 0, done: false });
        assert_eq!(progress_value(0.0, 100.0, 255.0, 1000.0), Frame { value: 25, done: false });
        assert_eq!(progress_value(10.0, 20.0, 500.0, 1000.0), Frame { value: 15, done: false });
    }

    #[test]
    fn finishes_at_end_value() {
        assert_eq!(progress_value(0.0, 100.0, 1000.0, 1000.0), Frame { value: 100, done: true });
        assert_eq!(progress_value(0.0, 100.0, 5000.0, 1000.0), Frame { value: 100, done: true });
        assert_eq!(progress_value(0.0, 7.0, 0.0, 0.0), Frame { value: 7, done: true });
    }

    #[test]
    fn counts_down_too() {
        assert_eq!(progress_value(100.0, 0.0, 500.0, 1000.0), Frame { value: 50, done: false });
    }
}
