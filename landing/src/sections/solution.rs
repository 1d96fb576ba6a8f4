use leptos::prelude::*;

use crate::behavior::Reveal;
use crate::config::use_site_config;
use crate::content::{SECTION_TECHNOLOGY, SOLUTION_STEPS, SolutionStep};

/// Three-step solution architecture: Sense, Analyse, Act.
#[component]
pub fn Solution() -> impl IntoView {
    let config = use_site_config();
    let steps = SOLUTION_STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let last = index + 1 == SOLUTION_STEPS.len();
            view! { <StepCard step=*step delay_ms=config.stagger(index) last=last /> }
        })
        .collect_view();

    view! {
        <section id=SECTION_TECHNOLOGY class="solution">
            <div class="container">
                <Reveal classes="section-header">
                    <p class="section-eyebrow">"Solution architecture"</p>
                    <h2 class="section-title">"From raw readings to a comfortable room"</h2>
                    <p class="section-description">
                        "No renovation, no rip-and-replace. TESSA sits on top of the "
                        "heating and ventilation a building already has."
                    </p>
                </Reveal>
                <div class="steps">
                    {steps}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepCard(step: SolutionStep, delay_ms: u32, last: bool) -> impl IntoView {
    view! {
        <Reveal delay_ms=delay_ms classes="step-card">
            <div class="step-number">{step.number}</div>
            <h3 class="step-title">{step.title}</h3>
            <p class="step-description">{step.description}</p>
            <code class="step-detail">{step.detail}</code>
            {(!last).then(|| view! { <span class="step-arrow" aria-hidden="true">"→"</span> })}
        </Reveal>
    }
}
