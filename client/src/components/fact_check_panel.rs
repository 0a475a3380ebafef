//! Fact-check panel: claim input, verdict card, and recent checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The verdict card is styled through `util::verdict`, so any label the
//! backend invents still renders with the neutral treatment. A successful
//! check refreshes the recent list if it has been opened, replacing any
//! history load still in flight.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{ClaimType, FactCheckResult};
use crate::state::fact_check::{FactCheckDraft, FactCheckState, RECENT_LIMIT};
use crate::state::request::RequestTicket;
use crate::util::format::{confidence_percent, display_timestamp};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn FactCheckPanel(fact_check: RwSignal<FactCheckState>, draft: RwSignal<FactCheckDraft>) -> impl IntoView {
    let fetch_recent = move |ticket: RequestTicket| {
        leptos::task::spawn_local(async move {
            let result = api::fetch_recent_fact_checks(RECENT_LIMIT).await;
            fact_check.update(|f| {
                f.finish_recent(ticket, result);
            });
        });
    };

    let load_recent = move || {
        if let Some(ticket) = fact_check.try_update(FactCheckState::begin_recent).flatten() {
            fetch_recent(ticket);
        }
    };

    let on_check = move |_| {
        let current = draft.get_untracked();
        let Some((ticket, request)) = fact_check.try_update(|f| f.begin_check(&current)).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::fact_check(&request).await;
            let succeeded = result.is_ok();
            let applied = fact_check.try_update(|f| f.finish_check(ticket, result)).unwrap_or(false);
            if !(applied && succeeded) {
                return;
            }
            if let Some(ticket) = fact_check.try_update(FactCheckState::refresh_recent).flatten() {
                fetch_recent(ticket);
            }
        });
    };

    let loading = move || fact_check.with(|f| f.result.is_loading());
    let can_check = move || !loading() && draft.with(|d| d.request().is_some());
    let verdict = Memo::new(move |_| fact_check.with(|f| f.result.value().cloned()));

    view! {
        <div class="panel fact-check-panel" data-testid="factcheck-panel">
            <div class="panel__heading">
                <h3>"AI Fact Checker"</h3>
                <p>"Paste any political claim to get an AI-powered fact check"</p>
            </div>

            <div class="fact-check-panel__types">
                {ClaimType::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                class="chip"
                                class:chip--active=move || draft.with(|d| d.claim_type == kind)
                                data-testid=format!("factcheck-type-{}", kind.as_str())
                                on:click=move |_| draft.update(|d| d.claim_type = kind)
                            >
                                {kind.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <textarea
                class="panel__textarea"
                placeholder="Paste a political claim, statement, or quote to fact-check..."
                data-testid="factcheck-input"
                prop:value=move || draft.with(|d| d.claim.clone())
                on:input=move |ev| draft.update(|d| d.claim = event_target_value(&ev))
            ></textarea>

            <button
                class="btn btn--primary panel__submit"
                data-testid="factcheck-submit"
                disabled=move || !can_check()
                on:click=on_check
            >
                {move || if loading() { "Analyzing..." } else { "Fact Check This Claim" }}
            </button>

            {move || verdict.with(|v| v.as_ref().map(verdict_card))}
            {move || {
                fact_check
                    .with(|f| f.result.error().map(str::to_owned))
                    .map(|message| view! { <div class="panel__error">{message}</div> })
            }}

            <section class="fact-check-panel__recent">
                <div class="fact-check-panel__recent-header">
                    <h4>"Recent checks"</h4>
                    <button
                        class="btn btn--ghost"
                        disabled=move || fact_check.with(|f| f.recent.is_loading())
                        on:click=move |_| load_recent()
                    >
                        {move || if fact_check.with(|f| f.recent.is_idle()) { "Show" } else { "Refresh" }}
                    </button>
                </div>
                {move || {
                    fact_check
                        .with(|f| f.recent.value().cloned())
                        .map(|checks| {
                            if checks.is_empty() {
                                return view! { <p class="panel__muted">"No fact checks yet."</p> }.into_any();
                            }
                            view! {
                                <ul class="fact-check-panel__recent-list">
                                    {checks.iter().map(recent_row).collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        })
                }}
                {move || {
                    fact_check
                        .with(|f| f.recent.error().map(str::to_owned))
                        .map(|message| view! { <div class="panel__error">{message}</div> })
                }}
            </section>
        </div>
    }
}

fn verdict_card(result: &FactCheckResult) -> AnyView {
    let verdict = result.verdict();
    let style = verdict.style();
    let explanation = render_markdown_html(&result.explanation);
    let sources = (!result.sources.is_empty()).then(|| {
        view! {
            <div class="verdict__sources">
                <p class="verdict__caption">"Sources"</p>
                <ul>{result.sources.iter().map(|s| view! { <li>{s.clone()}</li> }).collect::<Vec<_>>()}</ul>
            </div>
        }
    });

    view! {
        <div class=style.class() data-testid="factcheck-result">
            <div class="verdict__summary">
                <span class="verdict__icon">{style.icon}</span>
                <div>
                    <p class="verdict__caption">"Verdict"</p>
                    <p class="verdict__label">{verdict.label()}</p>
                </div>
                <div class="verdict__confidence">
                    <p class="verdict__caption">"Confidence"</p>
                    <p class="verdict__percent">{confidence_percent(result.confidence)}</p>
                </div>
            </div>
            <div class="verdict__body">
                <p class="verdict__caption">"Claim"</p>
                <p class="verdict__claim">{format!("\"{}\"", result.claim)}</p>
                <p class="verdict__caption">"Explanation"</p>
                <div class="verdict__explanation" inner_html=explanation></div>
                {sources}
            </div>
        </div>
    }
    .into_any()
}

fn recent_row(check: &FactCheckResult) -> AnyView {
    let style = check.verdict().style();
    let when = check.timestamp.as_deref().map(display_timestamp).unwrap_or_default();
    view! {
        <li class="fact-check-panel__recent-item">
            <span class=style.class()>{style.icon} " " {check.verdict().label()}</span>
            <span class="fact-check-panel__recent-claim">{check.claim.clone()}</span>
            <span class="panel__muted">{when}</span>
        </li>
    }
    .into_any()
}
