use leptos::prelude::*;

use crate::config::{VERSION, use_site_config};

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_site_config();
    let copyright = format!("© {} {}. All rights reserved.", config.copyright_year, config.brand);

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">"T"</span>
                    <span class="footer-title">{config.brand}</span>
                </div>
                <div class="footer-links">
                    <a href=config.mailto() class="footer-link">{config.contact_email}</a>
                    <a href="/privacy" class="footer-link">"Privacy"</a>
                    <a href="/imprint" class="footer-link">"Imprint"</a>
                </div>
                <p class="footer-copyright">
                    {copyright}
                    <span class="footer-version">{VERSION}</span>
                </p>
            </div>
        </footer>
    }
}
