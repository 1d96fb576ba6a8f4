//! TESSA landing page, rendered client-side with Leptos 0.8.
//!
//! One scrolling page: navigation, hero, context (stats and literature),
//! solution architecture, revenue model, team, footer. The only behaviour is
//! scroll-triggered reveal, the navbar's scrolled style, smooth anchor
//! navigation and the mobile menu; see [`behavior`].

pub mod behavior;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod pages;
pub mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use config::SiteConfig;
use pages::{HomePage, ImprintPage, NotFoundPage, PrivacyPage};

pub use config::VERSION;
pub use error::DomError;

#[component]
pub fn App() -> impl IntoView {
    provide_context(SiteConfig::default());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/privacy") view=PrivacyPage />
                <Route path=path!("/imprint") view=ImprintPage />
            </Routes>
        </Router>
    }
}

/// Install panic and log hooks, then mount `App` on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!(version = VERSION, "mounting landing page");
    leptos::mount::mount_to_body(App);
}
