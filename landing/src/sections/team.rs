use leptos::prelude::*;

use crate::behavior::Reveal;
use crate::config::use_site_config;
use crate::content::{SECTION_TEAM, TEAM};

#[component]
pub fn Team() -> impl IntoView {
    let config = use_site_config();

    view! {
        <section id=SECTION_TEAM class="team">
            <div class="container">
                <Reveal classes="section-header">
                    <p class="section-eyebrow">"Team"</p>
                    <h2 class="section-title">"Facilities, firmware and control theory"</h2>
                </Reveal>
                <div class="team-grid">
                    {TEAM
                        .iter()
                        .enumerate()
                        .map(|(index, member)| {
                            view! {
                                <Reveal delay_ms=config.stagger(index) classes="team-card">
                                    <div class="team-avatar" aria-hidden="true">{member.initials}</div>
                                    <h3 class="team-name">{member.name}</h3>
                                    <p class="team-role">{member.role}</p>
                                    <p class="team-bio">{member.bio}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
