use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;

use crate::config::SiteConfig;
use crate::dom;

/// Collapses bursts of calls into one invocation `wait_ms` after the last.
#[derive(Clone)]
pub struct Debouncer {
    wait_ms: u32,
    callback: Rc<RefCell<Box<dyn FnMut()>>>,
    timer: Rc<RefCell<Option<Timeout>>>,
    pending: Rc<Cell<bool>>,
}

impl Debouncer {
    pub fn new<F>(wait_ms: u32, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            wait_ms,
            callback: Rc::new(RefCell::new(Box::new(callback))),
            timer: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(false)),
        }
    }

    pub fn call(&self) {
        let callback = self.callback.clone();
        let pending = self.pending.clone();
        let timeout = Timeout::new(self.wait_ms, move || {
            pending.set(false);
            (callback.borrow_mut())();
        });
        self.pending.set(true);
        // Replacing the previous handle cancels it.
        self.timer.borrow_mut().replace(timeout);
    }

    /// True between a call and the invocation it schedules.
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Debounced scroll hook. Nothing is attached to it yet; scroll-driven
/// effects that can tolerate a frame of latency belong here.
pub fn init(config: &SiteConfig) -> Result<(), JsValue> {
    let debouncer = Debouncer::new(config.scroll_debounce_ms, || {});
    let window = dom::window()?;
    dom::listen(&window, "scroll", move |_| debouncer.call())
}
