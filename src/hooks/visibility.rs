use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Flips to visible on the first intersection and stays there.
    Latch,
    /// Follows the viewport in and out.
    Level,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visibility {
    mode: RevealMode,
    visible: bool,
}

impl Visibility {
    pub fn new(mode: RevealMode) -> Self {
        Self { mode, visible: false }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn observe(&mut self, intersecting: bool) {
        match self.mode {
            RevealMode::Latch => self.visible |= intersecting,
            RevealMode::Level => self.visible = intersecting,
        }
    }
}

impl Reducible for Visibility {
    /// Whether the observed node currently intersects the viewport.
    type Action = bool;

    fn reduce(self: Rc<Self>, intersecting: bool) -> Rc<Self> {
        let mut next = (*self).clone();
        next.observe(intersecting);
        if next == *self {
            self
        } else {
            next.into()
        }
    }
}

/// CSS classes for an element that fades and slides in with its section.
pub fn reveal(visible: bool) -> Classes {
    classes!("reveal", visible.then_some("shown"))
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe(
    node: &NodeRef,
    threshold: f64,
    dispatcher: UseReducerDispatcher<Visibility>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let element = node.cast::<Element>()?;

    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            dispatcher.dispatch(entry.is_intersecting());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(err) => {
            // Content is still rendered, it just never animates in.
            log::warn!("IntersectionObserver unavailable: {:?}", err);
            None
        }
    }
}

/// Watches `node` and reports whether it has been (or, for
/// [`RevealMode::Level`], currently is) at least `threshold` on screen.
#[hook]
pub fn use_visibility(node: NodeRef, threshold: f64, mode: RevealMode) -> bool {
    let state = use_reducer(move || Visibility::new(mode));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(node, threshold)| {
                let observer = observe(node, *threshold, dispatcher);
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (node, threshold),
        );
    }

    state.visible()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_stays_visible_after_leaving() {
        let mut flag = Visibility::new(RevealMode::Latch);
        assert!(!flag.visible());
        flag.observe(false);
        assert!(!flag.visible());
        flag.observe(true);
        assert!(flag.visible());
        flag.observe(false);
        assert!(flag.visible());
    }

    #[test]
    fn level_follows_the_viewport() {
        let mut flag = Visibility::new(RevealMode::Level);
        flag.observe(true);
        assert!(flag.visible());
        flag.observe(false);
        assert!(!flag.visible());
        flag.observe(true);
        assert!(flag.visible());
    }

    #[test]
    fn unchanged_state_keeps_the_same_rc() {
        let flag = Rc::new(Visibility::new(RevealMode::Latch));
        let shown = flag.reduce(true);
        let again = shown.clone().reduce(false);
        assert!(Rc::ptr_eq(&shown, &again));
    }

    #[test]
    fn reveal_classes_switch_on_visibility() {
        assert_eq!(reveal(false).to_string(), "reveal");
        assert_eq!(reveal(true).to_string(), "reveal shown");
    }
}
