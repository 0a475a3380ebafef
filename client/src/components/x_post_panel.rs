//! X post analyzer panel.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::XPostAnalysis;
use crate::state::x_post::{XPostDraft, XPostState};
use crate::util::format::display_timestamp;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn XPostPanel(x_post: RwSignal<XPostState>, draft: RwSignal<XPostDraft>) -> impl IntoView {
    let on_analyze = move |_| {
        let current = draft.get_untracked();
        let Some((ticket, request)) = x_post.try_update(|x| x.begin_analyze(&current)).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::analyze_x_post(&request).await;
            x_post.update(|x| {
                x.finish_analyze(ticket, result);
            });
        });
    };

    let loading = move || x_post.with(|x| x.result.is_loading());
    let can_analyze = move || !loading() && draft.with(|d| d.request().is_some());
    let analysis = Memo::new(move |_| x_post.with(|x| x.result.value().cloned()));

    view! {
        <div class="panel x-post-panel" data-testid="xpost-panel">
            <div class="panel__heading">
                <h3>"X Post Analyzer"</h3>
                <p>"Paste any political X (Twitter) post for AI analysis"</p>
            </div>

            <input
                class="panel__input"
                type="text"
                placeholder="Author username (optional)"
                data-testid="xpost-author"
                prop:value=move || draft.with(|d| d.author.clone())
                on:input=move |ev| draft.update(|d| d.author = event_target_value(&ev))
            />
            <textarea
                class="panel__textarea"
                placeholder="Paste the X post content here..."
                data-testid="xpost-content"
                prop:value=move || draft.with(|d| d.content.clone())
                on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
            ></textarea>

            <button
                class="btn btn--primary panel__submit"
                data-testid="xpost-submit"
                disabled=move || !can_analyze()
                on:click=on_analyze
            >
                {move || if loading() { "Analyzing..." } else { "Analyze Post" }}
            </button>

            {move || analysis.with(|a| a.as_ref().map(analysis_card))}
            {move || {
                x_post
                    .with(|x| x.result.error().map(str::to_owned))
                    .map(|message| view! { <div class="panel__error">{message}</div> })
            }}
        </div>
    }
}

fn analysis_card(analysis: &XPostAnalysis) -> AnyView {
    let author = analysis
        .display_author()
        .map(|name| view! { <span class="x-post-panel__author">{format!("Author: @{name}")}</span> });
    let when = analysis
        .timestamp
        .as_deref()
        .map(|ts| view! { <span class="panel__muted">{display_timestamp(ts)}</span> });
    let rendered = render_markdown_html(&analysis.analysis);

    view! {
        <div class="result-card" data-testid="xpost-result">
            <div class="result-card__header">
                <span class="result-card__title">"Analysis Results"</span>
                {author}
                {when}
            </div>
            <div class="result-card__markdown" inner_html=rendered></div>
        </div>
    }
    .into_any()
}
