use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::config::SiteConfig;
use crate::dom;

pub const RIPPLE_CLASS: &str = "ripple";

/// Client-space bounding box of the clicked button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Size and button-relative position of a ripple centered on the click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn new(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        let size = bounds.width.max(bounds.height);
        Self {
            size,
            left: client_x - bounds.left - size / 2.0,
            top: client_y - bounds.top - size / 2.0,
        }
    }
}

pub fn is_ripple_target(element: &Element, classes: &[String]) -> bool {
    dom::has_any_class(element, classes)
}

fn spawn(button: &HtmlElement, event: &MouseEvent, duration_ms: u32) -> Result<(), JsValue> {
    let rect = button.get_bounding_client_rect();
    let geometry = RippleGeometry::new(
        Bounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        },
        event.client_x() as f64,
        event.client_y() as f64,
    );

    let ripple = dom::document()?
        .create_element("span")?
        .dyn_into::<HtmlElement>()?;
    ripple.class_list().add_1(RIPPLE_CLASS)?;

    let size = format!("{}px", geometry.size);
    let left = format!("{}px", geometry.left);
    let top = format!("{}px", geometry.top);
    let animation = format!("ripple {}ms linear", duration_ms);
    dom::set_styles(
        &ripple,
        &[
            ("width", &size),
            ("height", &size),
            ("left", &left),
            ("top", &top),
            ("position", "absolute"),
            ("border-radius", "50%"),
            ("background", "rgba(255, 255, 255, 0.6)"),
            ("transform", "scale(0)"),
            ("animation", &animation),
            ("pointer-events", "none"),
        ],
    );

    dom::set_styles(button, &[("position", "relative"), ("overflow", "hidden")]);
    button.append_child(&ripple)?;

    Timeout::new(duration_ms, move || {
        // The button may have been removed together with its ripple.
        if ripple.is_connected() {
            ripple.remove();
        }
    })
    .forget();

    Ok(())
}

/// Adds a click ripple to every element carrying one of the configured
/// button classes. Keyframes live in `static/landing.css`.
pub fn init(config: &SiteConfig) -> Result<(), JsValue> {
    let classes = config.ripple_classes.clone();
    let duration_ms = config.ripple_duration_ms;

    let document = dom::document()?;
    dom::listen(&document, "click", move |event| {
        let Some(target) = dom::event_element(&event) else {
            return;
        };
        if !is_ripple_target(&target, &classes) {
            return;
        }
        let (Ok(button), Ok(event)) = (
            target.dyn_into::<HtmlElement>(),
            event.dyn_into::<MouseEvent>(),
        ) else {
            return;
        };
        if let Err(e) = spawn(&button, &event, duration_ms) {
            warn!("Ripple failed: {:?}", e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centered_on_click() {
        let bounds = Bounds {
            left: 100.0,
            top: 40.0,
            width: 120.0,
            height: 40.0,
        };
        let geometry = RippleGeometry::new(bounds, 160.0, 60.0);
        assert_eq!(geometry.size, 120.0);
        assert_eq!(geometry.left, 0.0);
        assert_eq!(geometry.top, -40.0);
        assert_eq!(geometry.left + geometry.size / 2.0, 160.0 - bounds.left);
        assert_eq!(geometry.top + geometry.size / 2.0, 60.0 - bounds.top);
    }

    #[test]
    fn tall_buttons_use_height() {
        let bounds = Bounds {
            left: 0.0,
            top: 0.0,
            width: 30.0,
            height: 90.0,
        };
        assert_eq!(RippleGeometry::new(bounds, 0.0, 0.0).size, 90.0);
    }
}
