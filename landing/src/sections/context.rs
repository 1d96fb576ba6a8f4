use leptos::prelude::*;

use super::{Literature, Stats};
use crate::behavior::Reveal;
use crate::content::SECTION_CONTEXT;

/// The problem TESSA addresses: headline numbers and the literature behind them.
#[component]
pub fn ContextSection() -> impl IntoView {
    view! {
        <section id=SECTION_CONTEXT class="context">
            <div class="container">
                <Reveal classes="section-header">
                    <p class="section-eyebrow">"Context"</p>
                    <h2 class="section-title">"Buildings are the biggest energy sink we ignore"</h2>
                    <p class="section-description">
                        "Most of the buildings we will heat in 2050 already exist, and most "
                        "of them waste energy every single day."
                    </p>
                </Reveal>
                <Stats />
                <Literature />
            </div>
        </section>
    }
}
