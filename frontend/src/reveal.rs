use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::dom;

/// Reveal state of one element. Only ever moves from `Hidden` to `Shown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
}

impl Visibility {
    pub fn observe(self, intersecting: bool) -> Self {
        match (self, intersecting) {
            (Visibility::Hidden, true) | (Visibility::Shown, _) => Visibility::Shown,
            (Visibility::Hidden, false) => Visibility::Hidden,
        }
    }

    /// Inline `opacity` and `transform` values for this state.
    pub fn styles(self, offset_px: f64) -> (&'static str, String) {
        match self {
            Visibility::Hidden => ("0", format!("translateY({}px)", offset_px)),
            Visibility::Shown => ("1", "translateY(0)".to_string()),
        }
    }
}

fn apply(element: &HtmlElement, visibility: Visibility, offset_px: f64) {
    let (opacity, transform) = visibility.styles(offset_px);
    dom::set_styles(element, &[("opacity", opacity), ("transform", &transform)]);
}

/// Hides every reveal target and shows each one the first time it scrolls
/// into view.
pub fn init(config: &SiteConfig) -> Result<(), JsValue> {
    let elements = dom::query_all(&config.reveal_targets)?;
    if elements.is_empty() {
        debug!("No scroll-reveal elements found");
        return Ok(());
    }

    let offset_px = config.reveal_offset_px;
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(element) = entry.target().dyn_into::<HtmlElement>() {
                // Re-applying the shown style on later intersections is a no-op.
                apply(&element, Visibility::Shown, offset_px);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &elements {
        apply(element, Visibility::Hidden, offset_px);
        dom::set_styles(element, &[("transition", &config.reveal_transition)]);
        observer.observe(element);
    }
    debug!("Observing {} scroll-reveal elements", elements.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_way() {
        let hidden = Visibility::Hidden;
        assert_eq!(hidden.observe(false), Visibility::Hidden);

        let shown = hidden.observe(true);
        assert_eq!(shown, Visibility::Shown);
        assert_eq!(shown.observe(false), Visibility::Shown);
        assert_eq!(shown.observe(true), Visibility::Shown);
    }

    #[test]
    fn hidden_style_is_offset_downward() {
        assert_eq!(
            Visibility::Hidden.styles(30.0),
            ("0", "translateY(30px)".to_string())
        );
        assert_eq!(
            Visibility::Shown.styles(30.0),
            ("1", "translateY(0)".to_string())
        );
    }
}
