use log::debug;
use wasm_bindgen::JsValue;
use web_sys::HtmlImageElement;

use crate::config::SiteConfig;

/// Starts fetching the configured images so they are cached before use.
pub fn init(config: &SiteConfig) -> Result<(), JsValue> {
    for src in &config.preload_images {
        let image = HtmlImageElement::new()?;
        image.set_src(src);
        debug!("Preloading {}", src);
    }
    Ok(())
}
