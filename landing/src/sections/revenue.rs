use leptos::prelude::*;

use crate::behavior::Reveal;
use crate::config::use_site_config;
use crate::content::{REVENUE_STREAMS, SECTION_ECONOMICS};

#[component]
pub fn Revenue() -> impl IntoView {
    let config = use_site_config();

    view! {
        <section id=SECTION_ECONOMICS class="revenue">
            <div class="container">
                <Reveal classes="section-header">
                    <p class="section-eyebrow">"Revenue model"</p>
                    <h2 class="section-title">"Hardware opens the door, software pays the rent"</h2>
                </Reveal>
                <div class="revenue-grid">
                    {REVENUE_STREAMS
                        .iter()
                        .enumerate()
                        .map(|(index, stream)| {
                            view! {
                                <Reveal delay_ms=config.stagger(index) classes="revenue-card">
                                    <h3 class="revenue-name">{stream.name}</h3>
                                    <p class="revenue-price">{stream.price}</p>
                                    <p class="revenue-description">{stream.description}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
