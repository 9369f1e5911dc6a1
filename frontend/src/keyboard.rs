use wasm_bindgen::{JsCast, JsValue};
use web_sys::KeyboardEvent;

use crate::carousel::{Direction, TestimonialCarousel};
use crate::dom;
use crate::menu::{MenuController, MenuInput};

/// Escape closes the mobile menu; Left/Right step through testimonials.
pub fn init(
    menu: Option<MenuController>,
    carousel: Option<TestimonialCarousel>,
) -> Result<(), JsValue> {
    let document = dom::document()?;
    dom::listen(&document, "keydown", move |event| {
        let Ok(event) = event.dyn_into::<KeyboardEvent>() else {
            return;
        };
        match event.key().as_str() {
            "Escape" => {
                if let Some(menu) = &menu {
                    menu.dispatch(MenuInput::Escape);
                }
            }
            "ArrowLeft" => {
                if let Some(carousel) = &carousel {
                    carousel.arrow(Direction::Left);
                }
            }
            "ArrowRight" => {
                if let Some(carousel) = &carousel {
                    carousel.arrow(Direction::Right);
                }
            }
            _ => {}
        }
    })
}
