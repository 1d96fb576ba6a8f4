//! Smooth in-page anchor navigation.

use tracing::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::error::{DomError, document, window};

/// Section id targeted by a pure fragment link (`"#team"` -> `"team"`).
///
/// Anything else (`"/#team"`, `"mailto:"`, a bare `"#"`) is left to the
/// browser.
pub fn section_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || id.contains(char::is_whitespace) {
        return None;
    }
    Some(id)
}

/// Smooth-scroll the section with `id` to the top of the viewport.
pub fn scroll_to_section(id: &str) -> Result<(), DomError> {
    let target = document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingSection(id.to_string()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn scroll_to_top() -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Click handler body for nav links.
///
/// Fragment links never jump: the default action is suppressed and the page
/// glides to the target instead. A missing target is a silent no-op. Other
/// hrefs fall through to the browser. Returns whether a scroll happened.
pub fn follow_anchor(event: &web_sys::Event, href: &str) -> bool {
    let Some(id) = section_id(href) else {
        return false;
    };
    event.prevent_default();
    match scroll_to_section(id) {
        Ok(()) => true,
        Err(err) => {
            debug!(%err, href, "anchor ignored");
            false
        }
    }
}
