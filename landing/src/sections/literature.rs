use leptos::prelude::*;

use crate::behavior::Reveal;
use crate::content::MARKET_DRIVERS;

/// Market drivers backed by literature, shown under the stats in `#context`.
#[component]
pub fn Literature() -> impl IntoView {
    view! {
        <Reveal classes="literature-panel" threshold=0.2>
            <div class="panel-header">
                <p class="section-eyebrow">"Literature & market drivers"</p>
                <h3 class="panel-title">"Why now"</h3>
            </div>
            <ul class="driver-list">
                {MARKET_DRIVERS
                    .iter()
                    .map(|driver| {
                        view! {
                            <li class="driver">
                                <h4 class="driver-title">{driver.title}</h4>
                                <p class="driver-summary">{driver.summary}</p>
                                <cite class="driver-citation">{driver.citation}</cite>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Reveal>
    }
}
