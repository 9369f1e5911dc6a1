use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::config::SiteConfig;
use crate::dom;

/// Header background as a function of the vertical scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderShade {
    Solid,
    Translucent,
}

impl HeaderShade {
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            HeaderShade::Translucent
        } else {
            HeaderShade::Solid
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            HeaderShade::Solid => "#FFFFFF",
            HeaderShade::Translucent => "rgba(255, 255, 255, 0.95)",
        }
    }

    pub fn backdrop_filter(self) -> &'static str {
        match self {
            HeaderShade::Solid => "none",
            HeaderShade::Translucent => "blur(10px)",
        }
    }
}

/// Recomputes the header shade on every scroll event.
pub fn init(config: &SiteConfig) -> Result<(), JsValue> {
    let Some(header) = dom::safe_query_selector(&config.header)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let window = dom::window()?;
    let threshold = config.header_threshold;
    let scrolled = window.clone();

    dom::listen(&window, "scroll", move |_| {
        let offset = scrolled.scroll_y().unwrap_or(0.0);
        let shade = HeaderShade::for_offset(offset, threshold);
        dom::set_styles(
            &header,
            &[
                ("background-color", shade.background()),
                ("backdrop-filter", shade.backdrop_filter()),
            ],
        );
    })
}
