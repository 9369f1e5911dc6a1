//! Auto-advancing testimonial carousel.
//!
//! [`CarouselState`] is the pure transition function: every DOM event is
//! turned into a [`CarouselInput`] and the returned [`CarouselEffect`] says
//! what to render and what to do with the repeating timer.
//! [`TestimonialCarousel`] owns the timer and applies those effects.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use log::debug;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::config::SiteConfig;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselInput {
    Start,
    Tick,
    Select(usize),
    PointerEnter,
    PointerLeave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    Keep,
    Start,
    Stop,
    /// Cancel the running timer and begin a fresh countdown.
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselEffect {
    pub render: Option<usize>,
    pub timer: TimerCommand,
}

impl CarouselEffect {
    const NONE: Self = Self {
        render: None,
        timer: TimerCommand::Keep,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn step(&mut self, input: CarouselInput) -> CarouselEffect {
        if self.is_empty() {
            return CarouselEffect::NONE;
        }
        match input {
            CarouselInput::Start | CarouselInput::PointerLeave => CarouselEffect {
                render: None,
                timer: TimerCommand::Start,
            },
            CarouselInput::PointerEnter => CarouselEffect {
                render: None,
                timer: TimerCommand::Stop,
            },
            CarouselInput::Tick => {
                self.index = (self.index + 1) % self.len;
                CarouselEffect {
                    render: Some(self.index),
                    timer: TimerCommand::Keep,
                }
            }
            CarouselInput::Select(i) if i < self.len => {
                self.index = i;
                CarouselEffect {
                    render: Some(i),
                    timer: TimerCommand::Restart,
                }
            }
            CarouselInput::Select(_) => CarouselEffect::NONE,
        }
    }
}

/// Indicator to select when an arrow key is pressed while `active` is the
/// marked indicator. Wraps at both ends; `None` when there is nothing to move.
pub fn arrow_target(active: Option<usize>, count: usize, direction: Direction) -> Option<usize> {
    let current = active?;
    if count <= 1 || current >= count {
        return None;
    }
    Some(match direction {
        Direction::Left => (current + count - 1) % count,
        Direction::Right => (current + 1) % count,
    })
}

struct Inner {
    state: CarouselState,
    panels: Vec<HtmlElement>,
    dots: Vec<HtmlElement>,
    active_class: String,
    interval_ms: u32,
    timer: Option<Interval>,
}

impl Inner {
    fn render(&self, index: usize) {
        for element in self.panels.iter().chain(self.dots.iter()) {
            dom::set_active(element, &self.active_class, false);
        }
        if let (Some(panel), Some(dot)) = (self.panels.get(index), self.dots.get(index)) {
            dom::set_active(panel, &self.active_class, true);
            dom::set_active(dot, &self.active_class, true);
        }
    }

    fn stop(&mut self) {
        // Dropping the handle clears the interval.
        if let Some(timer) = self.timer.take() {
            drop(timer);
        }
    }

    fn start(&mut self, handle: Weak<RefCell<Inner>>) {
        self.stop();
        self.timer = Some(Interval::new(self.interval_ms, move || {
            if let Some(inner) = handle.upgrade() {
                TestimonialCarousel { inner }.dispatch(CarouselInput::Tick);
            }
        }));
    }
}

/// Testimonial panels paired by position with their indicator dots.
#[derive(Clone)]
pub struct TestimonialCarousel {
    inner: Rc<RefCell<Inner>>,
}

impl TestimonialCarousel {
    pub fn new(
        panels: Vec<HtmlElement>,
        dots: Vec<HtmlElement>,
        active_class: &str,
        interval_ms: u32,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: CarouselState::new(panels.len()),
                panels,
                dots,
                active_class: active_class.to_string(),
                interval_ms,
                timer: None,
            })),
        }
    }

    pub fn current(&self) -> usize {
        self.inner.borrow().state.index()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().timer.is_some()
    }

    pub fn dispatch(&self, input: CarouselInput) {
        let handle = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        let effect = inner.state.step(input);
        debug!("Carousel {:?} -> {:?}", input, effect);

        if let Some(index) = effect.render {
            inner.render(index);
        }
        match effect.timer {
            TimerCommand::Keep => {}
            TimerCommand::Stop => inner.stop(),
            TimerCommand::Start | TimerCommand::Restart => inner.start(handle),
        }
    }

    /// Moves one step from whichever dot currently carries the active class
    /// by clicking the neighbouring dot, so it goes through the same path as
    /// a pointer click.
    pub fn arrow(&self, direction: Direction) {
        let dot = {
            let inner = self.inner.borrow();
            let active = inner
                .dots
                .iter()
                .position(|dot| dot.class_list().contains(&inner.active_class));
            arrow_target(active, inner.dots.len(), direction)
                .and_then(|index| inner.dots.get(index).cloned())
        };
        if let Some(dot) = dot {
            dot.click();
        }
    }

    /// Selects the matching panel whenever an indicator dot is clicked.
    pub fn bind_indicators(&self) -> Result<(), JsValue> {
        let dots = self.inner.borrow().dots.clone();
        for (index, dot) in dots.iter().enumerate() {
            let carousel = self.clone();
            dom::listen(dot, "click", move |_| {
                carousel.dispatch(CarouselInput::Select(index));
            })?;
        }
        Ok(())
    }
}

pub fn init(config: &SiteConfig) -> Result<Option<TestimonialCarousel>, JsValue> {
    let panels = dom::query_all(&config.testimonials)?;
    let dots = dom::query_all(&config.dots)?;
    if panels.is_empty() {
        debug!("No testimonials found, carousel disabled");
        return Ok(None);
    }

    let carousel = TestimonialCarousel::new(
        panels,
        dots,
        &config.active_class,
        config.carousel_interval_ms,
    );
    carousel.bind_indicators()?;

    if let Some(container) = dom::query(&config.testimonials_container) {
        let on_enter = carousel.clone();
        dom::listen(&container, "mouseenter", move |_| {
            on_enter.dispatch(CarouselInput::PointerEnter);
        })?;
        let on_leave = carousel.clone();
        dom::listen(&container, "mouseleave", move |_| {
            on_leave.dispatch(CarouselInput::PointerLeave);
        })?;
    }

    carousel.dispatch(CarouselInput::Start);
    Ok(Some(carousel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_advance_and_wrap() {
        for n in 1..=5 {
            let mut state = CarouselState::new(n);
            for k in 1..=12 {
                let effect = state.step(CarouselInput::Tick);
                assert_eq!(effect.render, Some(k % n));
                assert_eq!(effect.timer, TimerCommand::Keep);
                assert_eq!(state.index(), k % n);
            }
        }
    }

    #[test]
    fn select_renders_and_restarts_timer() {
        let mut state = CarouselState::new(4);
        for i in 0..4 {
            let effect = state.step(CarouselInput::Select(i));
            assert_eq!(effect.render, Some(i));
            assert_eq!(effect.timer, TimerCommand::Restart);
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut state = CarouselState::new(3);
        state.step(CarouselInput::Select(1));
        assert_eq!(state.step(CarouselInput::Select(3)), CarouselEffect::NONE);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn pause_and_resume_keep_index() {
        let mut state = CarouselState::new(3);
        state.step(CarouselInput::Tick);

        let paused = state.step(CarouselInput::PointerEnter);
        assert_eq!(paused.timer, TimerCommand::Stop);
        assert_eq!(paused.render, None);

        let resumed = state.step(CarouselInput::PointerLeave);
        assert_eq!(resumed.timer, TimerCommand::Start);
        assert_eq!(resumed.render, None);
        assert_eq!(state.index(), 1);

        assert_eq!(state.step(CarouselInput::Tick).render, Some(2));
    }

    #[test]
    fn empty_carousel_never_starts() {
        let mut state = CarouselState::new(0);
        for input in [
            CarouselInput::Start,
            CarouselInput::Tick,
            CarouselInput::Select(0),
            CarouselInput::PointerLeave,
        ] {
            assert_eq!(state.step(input), CarouselEffect::NONE);
        }
    }

    #[test]
    fn arrows_wrap_at_both_ends() {
        let n = 4;
        for i in 0..n {
            assert_eq!(arrow_target(Some(i), n, Direction::Left), Some((i + n - 1) % n));
            assert_eq!(arrow_target(Some(i), n, Direction::Right), Some((i + 1) % n));
        }
    }

    #[test]
    fn arrows_need_an_active_dot_and_more_than_one() {
        assert_eq!(arrow_target(None, 3, Direction::Right), None);
        assert_eq!(arrow_target(Some(0), 1, Direction::Left), None);
        assert_eq!(arrow_target(Some(0), 0, Direction::Right), None);
    }
}
