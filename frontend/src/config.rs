use log::{warn, Level};
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` block that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Selectors the page markup is expected to provide, plus the timing and
/// geometry constants for every effect.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub header: String,
    pub hamburger: String,
    pub nav_menu: String,
    pub nav_links: String,
    pub anchor_links: String,
    pub testimonials: String,
    pub dots: String,
    pub testimonials_container: String,
    pub reveal_targets: String,
    pub floating_icons: String,
    pub active_class: String,
    pub ripple_classes: Vec<String>,
    pub scroll_margin: f64,
    pub carousel_interval_ms: u32,
    pub header_threshold: f64,
    pub ripple_duration_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_offset_px: f64,
    pub reveal_transition: String,
    pub floating_max_delay_secs: f64,
    pub scroll_debounce_ms: u32,
    pub preload_images: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header: ".header".to_string(),
            hamburger: ".hamburger".to_string(),
            nav_menu: ".nav-menu".to_string(),
            nav_links: ".nav-link".to_string(),
            anchor_links: "a[href^=\"#\"]".to_string(),
            testimonials: ".testimonial".to_string(),
            dots: ".dot".to_string(),
            testimonials_container: ".testimonials-container".to_string(),
            reveal_targets: ".step, .feature, .service-card, .section-title".to_string(),
            floating_icons: ".floating-icon".to_string(),
            active_class: "active".to_string(),
            ripple_classes: vec!["btn".to_string(), "download-btn".to_string()],
            scroll_margin: 20.0,
            carousel_interval_ms: 5000,
            header_threshold: 100.0,
            ripple_duration_ms: 600,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            reveal_offset_px: 30.0,
            reveal_transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
            floating_max_delay_secs: 2.0,
            scroll_debounce_ms: 16,
            preload_images: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parses an override block. Fields left out keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the override block from the current document, falling back to
    /// defaults when it is absent or malformed.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}
