use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Node};

use crate::config::SiteConfig;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuInput {
    Toggle,
    LinkSelected,
    OutsideClick,
    Escape,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Applies one input and returns the resulting open flag.
    pub fn apply(&mut self, input: MenuInput) -> bool {
        self.open = match input {
            MenuInput::Toggle => !self.open,
            MenuInput::LinkSelected | MenuInput::OutsideClick | MenuInput::Escape => false,
        };
        self.open
    }
}

/// Mobile navigation: a hamburger trigger and the panel it opens, both
/// carrying the active class while open.
#[derive(Clone)]
pub struct MenuController {
    hamburger: Element,
    menu: Element,
    active_class: Rc<str>,
    state: Rc<Cell<MenuState>>,
}

impl MenuController {
    pub fn new(hamburger: Element, menu: Element, active_class: &str) -> Self {
        Self {
            hamburger,
            menu,
            active_class: Rc::from(active_class),
            state: Rc::new(Cell::new(MenuState::default())),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.get().open
    }

    pub fn dispatch(&self, input: MenuInput) {
        let mut state = self.state.get();
        let open = state.apply(input);
        self.state.set(state);
        dom::set_active(&self.hamburger, &self.active_class, open);
        dom::set_active(&self.menu, &self.active_class, open);
    }

    fn contains(&self, node: Option<&Node>) -> bool {
        self.hamburger.contains(node) || self.menu.contains(node)
    }
}

/// Wires the menu to its trigger, its links and outside clicks. Returns
/// `None` when the page has no hamburger or no menu panel.
pub fn init(config: &SiteConfig) -> Result<Option<MenuController>, JsValue> {
    let (Some(hamburger), Some(menu)) = (
        dom::query(&config.hamburger),
        dom::query(&config.nav_menu),
    ) else {
        debug!("Mobile menu markup not found, skipping");
        return Ok(None);
    };

    let controller = MenuController::new(hamburger.into(), menu.into(), &config.active_class);

    {
        let trigger = controller.hamburger.clone();
        let controller = controller.clone();
        dom::listen(&trigger, "click", move |_| {
            controller.dispatch(MenuInput::Toggle);
        })?;
    }

    for link in dom::query_all(&config.nav_links)? {
        let controller = controller.clone();
        dom::listen(&link, "click", move |_| {
            controller.dispatch(MenuInput::LinkSelected);
        })?;
    }

    {
        let document = dom::document()?;
        let controller = controller.clone();
        dom::listen(&document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !controller.contains(target.as_ref()) {
                controller.dispatch(MenuInput::OutsideClick);
            }
        })?;
    }

    Ok(Some(controller))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_open_flag() {
        let mut state = MenuState::default();
        assert!(state.apply(MenuInput::Toggle));
        assert!(!state.apply(MenuInput::Toggle));
    }

    #[test]
    fn closing_inputs_force_closed() {
        for input in [
            MenuInput::LinkSelected,
            MenuInput::OutsideClick,
            MenuInput::Escape,
        ] {
            let mut state = MenuState { open: true };
            assert!(!state.apply(input), "{:?} should close the menu", input);
            assert!(!state.apply(input), "{:?} should keep it closed", input);
        }
    }
}
