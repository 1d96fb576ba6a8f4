use leptos::prelude::*;

use crate::behavior::Reveal;
use crate::config::use_site_config;
use crate::content::{STATS, Stat};

#[component]
pub fn Stats() -> impl IntoView {
    let config = use_site_config();
    let cards = STATS
        .iter()
        .enumerate()
        .map(|(index, stat)| view! { <StatCard stat=*stat delay_ms=config.stagger(index) /> })
        .collect_view();

    view! {
        <div class="stats-grid">
            {cards}
        </div>
    }
}

#[component]
fn StatCard(stat: Stat, delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal delay_ms=delay_ms classes="stat-card">
            <div class="stat-value">{stat.value}</div>
            <p class="stat-label">{stat.label}</p>
            <p class="stat-source">{stat.source}</p>
        </Reveal>
    }
}
