use leptos::ev;
use leptos::prelude::*;

use crate::behavior::{Reveal, follow_anchor};
use crate::config::use_site_config;
use crate::content::{HERO, SECTION_TECHNOLOGY};

#[component]
pub fn Hero() -> impl IntoView {
    let config = use_site_config();
    let technology_href = format!("#{SECTION_TECHNOLOGY}");
    let target = technology_href.clone();

    view! {
        <section class="hero">
            <div class="hero-background"></div>
            <div class="container">
                <Reveal classes="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        {HERO.badge}
                    </div>
                    <h1 class="hero-title">
                        <span class="hero-title-accent">{HERO.title_accent}</span>
                        <br />
                        {HERO.title_rest}
                    </h1>
                    <p class="hero-description">{HERO.description}</p>
                    <div class="hero-actions">
                        <a
                            href=technology_href
                            class="btn btn-primary"
                            on:click=move |event: ev::MouseEvent| {
                                follow_anchor(&event, &target);
                            }
                        >
                            {HERO.primary_cta}
                        </a>
                        <a href=config.mailto() class="btn btn-secondary">
                            {HERO.secondary_cta}
                            " →"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
