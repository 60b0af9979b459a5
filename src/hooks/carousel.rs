use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Circular index over a fixed, non-empty list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

pub enum CarouselAction {
    Next,
    Previous,
    /// Callers only pass indices of the list they render.
    JumpTo(usize),
}

impl Carousel {
    /// Panics when `len` is zero; every carousel on the page wraps a
    /// compiled-in list with at least one entry.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "carousel needs at least one item");
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn jump_to(&mut self, index: usize) {
        self.index = index;
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// 1-based position for "step n / len" labels.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn progress_percent(&self) -> u32 {
        ((self.position() as f64 / self.len as f64) * 100.0).round() as u32
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Previous => next.previous(),
            CarouselAction::JumpTo(index) => next.jump_to(index),
        }
        next.into()
    }
}

#[hook]
pub fn use_carousel(len: usize) -> UseReducerHandle<Carousel> {
    use_reducer(move || Carousel::new(len))
}

/// Advances the carousel every `period_ms` for as long as the component is
/// mounted. Manual navigation does not pause or restart the timer, so a tick
/// can land right after a click.
#[hook]
pub fn use_auto_rotate(carousel: &UseReducerHandle<Carousel>, period_ms: u32) {
    let dispatcher = carousel.dispatcher();
    use_effect_with_deps(
        move |period_ms| {
            log::debug!("Starting carousel rotation every {}ms", period_ms);
            let interval = Interval::new(*period_ms, move || {
                dispatcher.dispatch(CarouselAction::Next);
            });
            move || drop(interval)
        },
        period_ms,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    /// Rotations a fixed-period timer has fired after `elapsed_ms`.
    fn ticks_elapsed(period_ms: u32, elapsed_ms: u64) -> u64 {
        if period_ms == 0 {
            return 0;
        }
        elapsed_ms / u64::from(period_ms)
    }

    #[test]
    fn next_len_times_returns_to_start() {
        for len in 1..=12 {
            for start in 0..len {
                let mut carousel = Carousel::new(len);
                carousel.jump_to(start);
                for _ in 0..len {
                    carousel.next();
                }
                assert_eq!(carousel.index(), start, "len {len}, start {start}");
            }
        }
    }

    #[test]
    fn next_then_previous_is_identity() {
        for len in 1..=12 {
            for start in 0..len {
                let mut carousel = Carousel::new(len);
                carousel.jump_to(start);
                carousel.next();
                carousel.previous();
                assert_eq!(carousel.index(), start);
            }
        }
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut carousel = Carousel::new(10);
        carousel.previous();
        assert_eq!(carousel.index(), 9);
    }

    #[test]
    fn jump_to_selects_exactly_that_index() {
        let mut carousel = Carousel::new(3);
        carousel.jump_to(2);
        assert_eq!(carousel.index(), 2);
        assert!(carousel.is_active(2));
        assert!(!carousel.is_active(0));
        assert!(!carousel.is_active(1));
    }

    #[test]
    fn single_item_carousel_stays_put() {
        let mut carousel = Carousel::new(1);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.previous();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    #[should_panic]
    fn empty_carousel_is_rejected() {
        let _ = Carousel::new(0);
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(Carousel::new(4));
        let state = state.reduce(CarouselAction::Previous);
        assert_eq!(state.index(), 3);
        let state = state.reduce(CarouselAction::Next);
        assert_eq!(state.index(), 0);
        let state = state.reduce(CarouselAction::JumpTo(2));
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn progress_tracks_position() {
        let mut steps = Carousel::new(10);
        assert_eq!(steps.position(), 1);
        assert_eq!(steps.progress_percent(), 10);
        steps.jump_to(9);
        assert_eq!(steps.progress_percent(), 100);

        let mut thirds = Carousel::new(3);
        thirds.jump_to(0);
        assert_eq!(thirds.progress_percent(), 33);
        thirds.next();
        assert_eq!(thirds.progress_percent(), 67);
    }

    #[test]
    fn testimonials_come_back_around_after_fifteen_seconds() {
        let mut testimonials = Carousel::new(3);
        let ticks = ticks_elapsed(config::TESTIMONIAL_ROTATE_MS, 15_000);
        assert_eq!(ticks, 3);
        for _ in 0..ticks {
            testimonials.next();
        }
        assert_eq!(testimonials.index(), 0);
    }

    #[test]
    fn timer_tick_overrides_manual_selection() {
        let state = Rc::new(Carousel::new(3));
        let state = state.reduce(CarouselAction::JumpTo(2));
        // The rotation timer fires right after the click.
        let state = state.reduce(CarouselAction::Next);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn partial_periods_do_not_tick() {
        assert_eq!(ticks_elapsed(5000, 4999), 0);
        assert_eq!(ticks_elapsed(5000, 5000), 1);
        assert_eq!(ticks_elapsed(0, 10_000), 0);
    }
}
