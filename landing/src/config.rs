// Site configuration
// Built by the TESSA Team (c)2025

use leptos::prelude::*;

/// Version string used across the landing page (single source of truth)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Vertical offset (px) past which the navbar switches to its opaque style.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Fraction of an element that must be on screen before it fades in.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Delay added per card when a row of cards reveals together.
pub const REVEAL_STAGGER_MS: u32 = 100;

pub const CONTACT_EMAIL: &str = "hello@tessa.energy";
pub const COPYRIGHT_YEAR: u16 = 2025;

/// Runtime view of the constants above, provided as context by `App`.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub contact_email: &'static str,
    pub nav_scroll_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_stagger_ms: u32,
    pub copyright_year: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "TESSA",
            contact_email: CONTACT_EMAIL,
            nav_scroll_threshold_px: NAV_SCROLL_THRESHOLD_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_stagger_ms: REVEAL_STAGGER_MS,
            copyright_year: COPYRIGHT_YEAR,
        }
    }
}

impl SiteConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }

    /// Start delay for the `index`-th card of a staggered row.
    pub fn stagger(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.reveal_stagger_ms.saturating_mul(index)
    }
}

/// Reads the `SiteConfig` context, falling back to defaults outside `App`.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
