//! Scroll-triggered reveal.
//!
//! An element starts hidden and offset, and settles into view the first time
//! enough of it scrolls on screen. It never hides again, and its
//! `IntersectionObserver` is disconnected as soon as it fires.

use std::cell::Cell;
use std::rc::Rc;

use js_sys::Array;
use leptos::html;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{DEFAULT_REVEAL_THRESHOLD, use_site_config};
use crate::error::DomError;

/// Shrinks the viewport bottom so elements fire slightly after they peek in.
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Visible fraction of an element, clamped to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::default()
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_THRESHOLD)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feed one intersection sample. Returns `true` only on the sample that
    /// flips `Hidden` to `Revealed`; once revealed, nothing changes it.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64, threshold: Threshold) -> bool {
        if *self == Self::Revealed {
            return false;
        }
        if is_intersecting && ratio >= threshold.get() {
            *self = Self::Revealed;
            return true;
        }
        false
    }

    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }
}

/// A live one-shot observation. Dropping it disconnects the observer if it
/// has not fired yet.
pub struct Observation {
    observer: IntersectionObserver,
    active: Rc<Cell<bool>>,
    state: Rc<Cell<RevealState>>,
    // Kept alive for as long as the observer may call it.
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observation {
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    /// Stop observing. Only the first call reaches the browser.
    pub fn disconnect(&self) {
        if self.active.replace(false) {
            self.observer.disconnect();
        }
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Watch `element` and call `on_reveal` once, the first time at least
/// `threshold` of it is visible.
pub fn observe_once(
    element: &web_sys::Element,
    threshold: Threshold,
    on_reveal: impl Fn() + 'static,
) -> Result<Observation, DomError> {
    let active = Rc::new(Cell::new(true));
    let state = Rc::new(Cell::new(RevealState::Hidden));

    let callback = {
        let active = Rc::clone(&active);
        let state = Rc::clone(&state);
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let mut current = state.get();
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let hit = entry.is_intersecting();
                    if current.observe(hit, entry.intersection_ratio(), threshold) {
                        state.set(current);
                        if active.replace(false) {
                            observer.disconnect();
                        }
                        on_reveal();
                        return;
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold.get()));
    options.set_root_margin(ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|_| DomError::Unsupported("IntersectionObserver"))?;
    observer.observe(element);

    Ok(Observation {
        observer,
        active,
        state,
        _callback: callback,
    })
}

/// Wraps `children` in a block that fades and slides in on first sight.
///
/// `threshold` defaults to the site config; `delay_ms` staggers siblings.
#[component]
pub fn Reveal(
    #[prop(optional)] threshold: Option<f64>,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] classes: String,
    children: Children,
) -> impl IntoView {
    let config = use_site_config();
    let threshold = Threshold::new(threshold.unwrap_or(config.reveal_threshold));
    let node_ref = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);

    Effect::new(move || {
        let Some(element) = node_ref.get() else {
            return;
        };
        if visible.get_untracked() {
            return;
        }
        let on_reveal = move || {
            debug!(delay_ms, "revealed");
            set_visible.set(true);
        };
        match observe_once(&element, threshold, on_reveal) {
            Ok(observation) => {
                let observation = SendWrapper::new(observation);
                on_cleanup(move || drop(observation));
            }
            Err(err) => {
                // Without an observer the content would stay hidden forever.
                warn!(%err, "reveal fallback: showing element immediately");
                set_visible.set(true);
            }
        }
    });

    let class = move || {
        let state = if visible.get() { " is-visible" } else { "" };
        if classes.is_empty() {
            format!("reveal{state}")
        } else {
            format!("reveal {classes}{state}")
        }
    };
    let style = format!("transition-delay: {delay_ms}ms");

    view! {
        <div node_ref=node_ref class=class style=style>
            {children()}
        </div>
    }
}
