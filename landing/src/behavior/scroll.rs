//! Scroll position tracking for the navbar.
//!
//! Scroll events arrive far faster than the screen repaints, so the handler
//! only schedules work: at most one animation frame is pending at a time, and
//! that frame reads the offset and updates the signal.

use std::cell::Cell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use tracing::debug;

/// `true` once the page has moved strictly past `threshold_px`.
pub fn is_scrolled(offset_px: f64, threshold_px: f64) -> bool {
    offset_px > threshold_px
}

/// Admits one pending animation frame at a time.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    /// `true` if the caller should schedule a frame now.
    pub fn request(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Called from inside the frame, before reading layout.
    pub fn complete(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Current vertical scroll offset, if there is a window to ask.
pub fn scroll_offset() -> Option<f64> {
    web_sys::window().and_then(|w| w.scroll_y().ok())
}

/// Frame body: push the offset into the signal. A frame that lands after the
/// owning component is gone finds the signal disposed and does nothing.
pub fn apply_offset(
    scrolled: ReadSignal<bool>,
    set_scrolled: WriteSignal<bool>,
    offset_px: f64,
    threshold_px: f64,
) {
    let Some(current) = scrolled.try_get_untracked() else {
        return;
    };
    let next = is_scrolled(offset_px, threshold_px);
    if current != next {
        debug!(offset = offset_px, scrolled = next, "navbar state");
        let _ = set_scrolled.try_set(next);
    }
}

/// Reactive "has the page scrolled past `threshold_px`" flag.
///
/// The window listener and any frame still waiting live as long as the
/// calling component.
pub fn use_scrolled(threshold_px: f64) -> ReadSignal<bool> {
    let initial = scroll_offset()
        .map(|offset| is_scrolled(offset, threshold_px))
        .unwrap_or(false);
    let (scrolled, set_scrolled) = signal(initial);
    let gate = Rc::new(FrameGate::default());
    let frame: Rc<Cell<Option<AnimationFrameRequestHandle>>> = Rc::new(Cell::new(None));

    let handle = {
        let frame = Rc::clone(&frame);
        window_event_listener(ev::scroll, move |_| {
            if !gate.request() {
                return;
            }
            let gate_in_frame = Rc::clone(&gate);
            let frame_in_frame = Rc::clone(&frame);
            let requested = request_animation_frame_with_handle(move || {
                frame_in_frame.set(None);
                gate_in_frame.complete();
                if let Some(offset) = scroll_offset() {
                    apply_offset(scrolled, set_scrolled, offset, threshold_px);
                }
            });
            match requested {
                Ok(pending) => frame.set(Some(pending)),
                Err(_) => gate.complete(),
            }
        })
    };

    let frame = SendWrapper::new(frame);
    on_cleanup(move || {
        handle.remove();
        if let Some(pending) = (*frame).take() {
            pending.cancel();
        }
    });

    scrolled
}
