//! Interactive behavior for the static landing page: mobile menu, smooth
//! in-page scrolling, testimonial carousel, scroll reveals, floating icons,
//! header shading and button ripples.
//!
//! Every component reads the existing markup through the selectors in
//! [`config::SiteConfig`]. A component whose markup is missing stays off
//! without affecting the others.

use std::cell::Cell;

use log::{info, warn};
use wasm_bindgen::JsValue;

pub mod animate;
pub mod carousel;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod floating;
pub mod header;
pub mod keyboard;
pub mod menu;
pub mod preload;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod validate;

pub use animate::animate_value;
pub use config::SiteConfig;
pub use validate::validate_email;

fn report<T>(feature: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to initialize {}: {:?}", feature, e);
            None
        }
    }
}

/// Initializes every component against the current document.
pub fn init_all(config: &SiteConfig) {
    let menu = report("mobile menu", menu::init(config)).flatten();
    report("smooth scrolling", scroll::init(config));
    let carousel = report("testimonial carousel", carousel::init(config)).flatten();
    report("scroll reveal", reveal::init(config));
    report("floating icons", floating::init(config));
    report("header shading", header::init(config));
    report("button ripples", ripple::init(config));
    report("debounced scroll", debounce::init(config));
    report("keyboard shortcuts", keyboard::init(menu, carousel));
    report("image preload", preload::init(config));
    info!("Landing page behaviors attached");
}

/// Runs [`init_all`] once the document structure is available, loading the
/// configuration at that point.
pub fn start() -> Result<(), JsValue> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        init_all(&SiteConfig::load());
        return Ok(());
    }

    let done = Cell::new(false);
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if !done.replace(true) {
            init_all(&SiteConfig::load());
        }
    })
}
