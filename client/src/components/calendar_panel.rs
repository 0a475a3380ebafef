//! Political calendar panel.

use leptos::prelude::*;

use crate::net::api;
use crate::state::calendar::CalendarState;
use crate::util::format::display_timestamp;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn CalendarPanel(calendar: RwSignal<CalendarState>) -> impl IntoView {
    let load = move || {
        let Some(ticket) = calendar.try_update(CalendarState::load).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::fetch_political_calendar().await;
            calendar.update(|c| {
                c.finish(ticket, result);
            });
        });
    };

    view! {
        <div class="panel calendar-panel" data-testid="calendar-panel">
            <div class="panel__heading">
                <h3>"Political Calendar 2026"</h3>
                <p>"Upcoming elections, sessions, and important dates"</p>
            </div>

            <Show when=move || calendar.with(CalendarState::awaiting_first_load)>
                <div class="panel__empty">
                    <button class="btn btn--primary" data-testid="calendar-load" on:click=move |_| load()>
                        "Load Political Calendar"
                    </button>
                </div>
            </Show>

            <Show when=move || calendar.with(|c| c.result.is_loading())>
                <div class="panel__spinner" aria-label="Loading"></div>
            </Show>

            {move || {
                calendar
                    .with(|c| {
                        c.result.value().map(|data| {
                            let when = data.timestamp.as_deref().map(display_timestamp).unwrap_or_default();
                            (render_markdown_html(&data.calendar), when)
                        })
                    })
                    .map(|(rendered, when)| {
                        view! {
                            <div class="result-card" data-testid="calendar-result">
                                <div class="result-card__header">
                                    <span class="result-card__title">"Upcoming Events"</span>
                                    <span class="panel__muted">{when}</span>
                                    <button class="btn btn--ghost" title="Refresh calendar" on:click=move |_| load()>
                                        "↻"
                                    </button>
                                </div>
                                <div class="result-card__markdown" inner_html=rendered></div>
                            </div>
                        }
                    })
            }}

            {move || {
                calendar
                    .with(|c| c.result.error().map(str::to_owned))
                    .map(|message| {
                        view! {
                            <div class="panel__error">
                                {message}
                                <button class="btn btn--ghost" on:click=move |_| load()>
                                    "Try again"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
