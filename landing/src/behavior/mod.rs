// Page behaviours: scroll reveal, navbar scroll state, anchor navigation
// Built by the TESSA Team (c)2025

pub mod anchor;
pub mod reveal;
pub mod scroll;

pub use anchor::{follow_anchor, scroll_to_section, scroll_to_top, section_id};
pub use reveal::{Reveal, RevealState, Threshold, observe_once};
pub use scroll::{FrameGate, is_scrolled, use_scrolled};
