use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Fixed-length count-up from zero, sampled at `steps` evenly spaced ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
    pub duration_ms: u32,
    pub steps: u32,
}

impl CountUp {
    pub const fn new(duration_ms: u32, steps: u32) -> Self {
        Self { duration_ms, steps }
    }

    /// Whole milliseconds per tick. Truncation means a full run can finish a
    /// little early (60 ticks of 33 ms is 1980 ms for the default 2000 ms);
    /// the last tick still lands exactly on the target.
    pub fn interval_ms(&self) -> u32 {
        self.duration_ms / self.steps.max(1)
    }

    pub fn value_at(&self, target: u32, step: u32) -> u32 {
        let progress = f64::from(step.min(self.steps)) / f64::from(self.steps.max(1));
        (f64::from(target) * ease_out_cubic(progress)).round() as u32
    }
}

impl Default for CountUp {
    fn default() -> Self {
        Self::new(config::COUNTER_DURATION_MS, config::COUNTER_STEPS)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterState {
    pub animation: CountUp,
    pub step: u32,
    pub has_run: bool,
}

pub enum CounterAction {
    Start,
    Tick,
}

impl CounterState {
    pub fn new(animation: CountUp) -> Self {
        Self { animation, step: 0, has_run: false }
    }

    pub fn finished(&self) -> bool {
        self.step >= self.animation.steps
    }

    pub fn running(&self) -> bool {
        self.has_run && !self.finished()
    }

    pub fn value(&self, target: u32) -> u32 {
        self.animation.value_at(target, self.step)
    }
}

impl Reducible for CounterState {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CounterAction::Start if !self.has_run => Rc::new(Self { has_run: true, ..(*self).clone() }),
            CounterAction::Tick if self.running() => Rc::new(Self { step: self.step + 1, ..(*self).clone() }),
            _ => self,
        }
    }
}

/// Counts up once, the first time `trigger` is true. Later triggers are
/// ignored; the timer is dropped when the run completes or on unmount.
#[hook]
pub fn use_count_up(trigger: bool, animation: CountUp) -> UseReducerHandle<CounterState> {
    let state = use_reducer(move || CounterState::new(animation));
    let interval_handle = use_mut_ref(|| None::<Interval>);

    {
        let dispatcher = state.dispatcher();
        let interval_handle = interval_handle.clone();
        let has_run = state.has_run;
        use_effect_with_deps(
            move |trigger| {
                if *trigger && !has_run {
                    log::debug!("Counting up over {}ms", animation.duration_ms);
                    dispatcher.dispatch(CounterAction::Start);
                    let tick = dispatcher.clone();
                    let interval = Interval::new(animation.interval_ms(), move || {
                        tick.dispatch(CounterAction::Tick);
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }
                || ()
            },
            trigger,
        );
    }

    // Stop ticking once the run is done, and in any case on unmount.
    {
        let interval_handle = interval_handle.clone();
        use_effect_with_deps(
            move |finished| {
                if *finished {
                    interval_handle.borrow_mut().take();
                }
                move || {
                    interval_handle.borrow_mut().take();
                }
            },
            state.finished(),
        );
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: Rc<CounterState>) -> Vec<Rc<CounterState>> {
        let mut frames = vec![state.clone()];
        let mut state = state.reduce(CounterAction::Start);
        while !state.finished() {
            state = state.reduce(CounterAction::Tick);
            frames.push(state.clone());
        }
        frames
    }

    #[test]
    fn lands_exactly_on_target() {
        let count = CountUp::default();
        for target in [0, 1, 50, 98, 280, 1_000_000] {
            assert_eq!(count.value_at(target, count.steps), target);
        }
    }

    #[test]
    fn never_goes_down() {
        let count = CountUp::default();
        for target in [1, 7, 50, 98, 280] {
            let mut last = 0;
            for step in 0..=count.steps {
                let value = count.value_at(target, step);
                assert!(value >= last, "target {target} dipped at step {step}");
                last = value;
            }
        }
    }

    #[test]
    fn starts_at_zero_and_eases_out() {
        let count = CountUp::default();
        assert_eq!(count.value_at(280, 0), 0);
        // Cubic ease-out is well past halfway at the midpoint.
        assert!(count.value_at(280, 30) > 140);
        assert_eq!(count.value_at(280, 30), 245);
    }

    #[test]
    fn steps_past_the_end_hold_the_target() {
        let count = CountUp::default();
        assert_eq!(count.value_at(98, 500), 98);
    }

    #[test]
    fn interval_splits_duration_evenly() {
        assert_eq!(CountUp::default().interval_ms(), 33);
        assert_eq!(CountUp::new(600, 60).interval_ms(), 10);
    }

    #[test]
    fn truncated_interval_finishes_within_the_duration() {
        let count = CountUp::default();
        let total = count.interval_ms() * count.steps;
        assert_eq!(total, 1980);
        assert!(total <= count.duration_ms);
        assert!(count.duration_ms - total < count.steps);
    }

    #[test]
    fn full_run_takes_every_step_once() {
        let frames = run(Rc::new(CounterState::new(CountUp::default())));
        assert_eq!(frames.len(), 61);
        let last = frames.last().expect("at least one frame");
        assert_eq!(last.value(280), 280);
        assert_eq!(last.value(50), 50);
        assert_eq!(last.value(98), 98);
    }

    #[test]
    fn ticks_before_start_are_ignored() {
        let state = Rc::new(CounterState::new(CountUp::default()));
        let state = state.reduce(CounterAction::Tick);
        assert_eq!(state.step, 0);
        assert!(!state.has_run);
    }

    #[test]
    fn second_start_does_not_replay() {
        let frames = run(Rc::new(CounterState::new(CountUp::default())));
        let done = frames.last().expect("at least one frame").clone();
        let again = done.clone().reduce(CounterAction::Start);
        assert!(Rc::ptr_eq(&done, &again));
        assert_eq!(again.value(280), 280);
        let again = again.reduce(CounterAction::Tick);
        assert_eq!(again.step, 60);
    }
}
