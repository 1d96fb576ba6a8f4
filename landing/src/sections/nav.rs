use leptos::ev;
use leptos::prelude::*;
use tracing::debug;

use crate::behavior::{follow_anchor, scroll_to_top, use_scrolled};
use crate::config::use_site_config;
use crate::content::NAV_ITEMS;

/// Top navigation. `in_page` is false on pages that do not carry the
/// sections, where links fall back to `/#section`.
#[component]
pub fn Nav(#[prop(default = true)] in_page: bool) -> impl IntoView {
    let config = use_site_config();
    let scrolled = use_scrolled(config.nav_scroll_threshold_px);
    let (menu_open, set_menu_open) = signal(false);

    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && menu_open.get_untracked() {
            set_menu_open.set(false);
        }
    });
    on_cleanup(move || escape.remove());

    let on_brand = move |event: ev::MouseEvent| {
        set_menu_open.set(false);
        if in_page {
            event.prevent_default();
            if let Err(err) = scroll_to_top() {
                debug!(%err, "scroll to top ignored");
            }
        }
    };

    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let href = item.href(in_page);
            let target = href.clone();
            view! {
                <a
                    href=href
                    class="nav-link"
                    on:click=move |event: ev::MouseEvent| {
                        set_menu_open.set(false);
                        follow_anchor(&event, &target);
                    }
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class=move || if scrolled.get() { "nav scrolled" } else { "nav" }>
            <div class="nav-inner">
                <a href="/" class="nav-brand" on:click=on_brand>
                    <span class="nav-logo">"T"</span>
                    <span class="nav-title">{config.brand}</span>
                </a>
                <button
                    class=move || if menu_open.get() { "nav-toggle active" } else { "nav-toggle" }
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                </button>
                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    {links}
                    <a
                        href=config.mailto()
                        class="nav-cta"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        "Contact"
                    </a>
                </div>
            </div>
        </nav>
    }
}
