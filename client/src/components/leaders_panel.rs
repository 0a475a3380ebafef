//! Leader updates panel with party filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every filter click issues a request and clears the previous text. The
//! active filter chip follows the latest request, not the latest response.

use leptos::prelude::*;

use crate::net::api;
use crate::state::leaders::{LeadersState, PartyFilter};
use crate::util::format::display_timestamp;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn LeadersPanel(leaders: RwSignal<LeadersState>) -> impl IntoView {
    let load = move |filter: PartyFilter| {
        let Some(ticket) = leaders.try_update(|l| l.load(filter)).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::fetch_leader_updates(filter.query_value()).await;
            leaders.update(|l| {
                l.finish(ticket, result);
            });
        });
    };

    view! {
        <div class="panel leaders-panel" data-testid="leaders-panel">
            <div class="panel__heading">
                <h3>"Political Leader Updates"</h3>
                <p>"Recent communications from key US political figures"</p>
            </div>

            <div class="leaders-panel__filters">
                {PartyFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        let tone = match filter {
                            PartyFilter::All => "all",
                            PartyFilter::Democratic => "dem",
                            PartyFilter::Republican => "rep",
                        };
                        view! {
                            <button
                                class=format!("chip chip--{tone}")
                                class:chip--active=move || leaders.with(|l| l.is_active(filter))
                                data-testid=format!("leaders-{tone}")
                                on:click=move |_| load(filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=move || leaders.with(|l| l.result.is_loading())>
                <div class="panel__spinner" aria-label="Loading"></div>
            </Show>

            {move || {
                leaders
                    .with(|l| l.result.value().cloned())
                    .map(|updates| {
                        let rendered = render_markdown_html(&updates.updates);
                        let when = display_timestamp(&updates.timestamp);
                        view! {
                            <div class="result-card" data-testid="leaders-result">
                                <div class="result-card__header">
                                    <span class="result-card__title">"Latest Updates"</span>
                                    <span class="panel__muted">{when}</span>
                                </div>
                                <div class="result-card__markdown" inner_html=rendered></div>
                            </div>
                        }
                    })
            }}

            <Show when=move || leaders.with(|l| l.result.is_idle())>
                <div class="panel__empty">
                    <p>"Select a category above to view leader updates"</p>
                </div>
            </Show>

            {move || {
                leaders
                    .with(|l| l.result.error().map(str::to_owned))
                    .map(|message| view! { <div class="panel__error">{message}</div> })
            }}
        </div>
    }
}
