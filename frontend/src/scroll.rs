use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::SiteConfig;
use crate::dom;

/// Scroll offset that puts `target_top` just below a fixed header.
pub fn scroll_target(target_top: f64, header_height: f64, margin: f64) -> f64 {
    target_top - header_height - margin
}

/// In-page fragment of an anchor's `href`, if it is one.
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty()).map(|_| href)
}

fn resolve(href: &str) -> Option<HtmlElement> {
    let selector = fragment(href)?;
    dom::document()
        .ok()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Replaces jumps to in-page fragments with smooth scrolling that clears
/// the fixed header.
pub fn init(config: &SiteConfig) -> Result<(), JsValue> {
    let links = dom::query_all(&config.anchor_links)?;
    debug!("Smooth scrolling {} in-page links", links.len());

    for link in links {
        let header_selector = config.header.clone();
        let margin = config.scroll_margin;
        let anchor: Element = link.clone().into();
        dom::listen(&link, "click", move |event| {
            event.prevent_default();

            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(section) = resolve(&href) else {
                return;
            };
            let header_height = dom::query(&header_selector)
                .map(|h| h.offset_height() as f64)
                .unwrap_or(0.0);

            let top = scroll_target(section.offset_top() as f64, header_height, margin);
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            if let Ok(window) = dom::window() {
                window.scroll_to_with_scroll_to_options(&options);
            }
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_clears_header_and_margin() {
        assert_eq!(scroll_target(900.0, 80.0, 20.0), 800.0);
        assert_eq!(scroll_target(50.0, 80.0, 20.0), -50.0);
    }

    #[test]
    fn only_named_fragments_resolve() {
        assert_eq!(fragment("#pricing"), Some("#pricing"));
        assert_eq!(fragment("#"), None);
        assert_eq!(fragment("/about#team"), None);
    }
}
