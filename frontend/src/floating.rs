use log::debug;
use wasm_bindgen::JsValue;
use web_sys::js_sys::Math;

use crate::config::SiteConfig;
use crate::dom;

/// Negative `animation-delay` for a random sample in `[0, 1)`, so identical
/// looping animations start out of phase.
pub fn animation_delay(random_unit: f64, max_secs: f64) -> String {
    format!("-{}s", random_unit.clamp(0.0, 1.0) * max_secs)
}

pub fn init(config: &SiteConfig) -> Result<(), JsValue> {
    let icons = dom::query_all(&config.floating_icons)?;
    debug!("Desynchronizing {} floating icons", icons.len());

    for icon in icons {
        let delay = animation_delay(Math::random(), config.floating_max_delay_secs);
        dom::set_styles(&icon, &[("animation-delay", &delay)]);

        let hovered = icon.clone();
        dom::listen(&icon, "mouseenter", move |_| {
            dom::set_styles(
                &hovered,
                &[
                    ("animation-play-state", "paused"),
                    ("transform", "scale(1.2) translateY(-5px)"),
                ],
            );
        })?;

        let left = icon.clone();
        dom::listen(&icon, "mouseleave", move |_| {
            dom::set_styles(
                &left,
                &[("animation-play-state", "running"), ("transform", "scale(1)")],
            );
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_is_negative_and_bounded() {
        assert_eq!(animation_delay(0.0, 2.0), "-0s");
        assert_eq!(animation_delay(0.5, 2.0), "-1s");
        assert_eq!(animation_delay(0.75, 2.0), "-1.5s");
        assert_eq!(animation_delay(3.0, 2.0), "-2s");
    }
}
