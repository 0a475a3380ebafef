//! Chat panel: free-form questions answered by the backend assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `ChatState` plus the draft signal. A submitted draft is
//! appended to the transcript at once; the assistant reply (or the fixed
//! error entry) is appended when the request settles. The message list
//! scrolls to the newest entry whenever the transcript or loading flag
//! changes. Typing touches only the draft.

use leptos::prelude::*;

use crate::net::api;
use crate::state::chat::{ChatMessage, ChatRole, ChatState, QUICK_QUESTIONS};
use crate::util::clock::now_iso;
use crate::util::format::join_sources;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ChatPanel(chat: RwSignal<ChatState>, draft: RwSignal<String>) -> impl IntoView {
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.loading));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = draft.get_untracked();
        let Some(request) = chat.try_update(|c| c.begin_send(&text, now_iso())).flatten() else {
            return;
        };
        draft.set(String::new());
        leptos::task::spawn_local(async move {
            let result = api::send_chat(&request).await;
            chat.update(|c| {
                c.finish(result, now_iso());
            });
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let loading = move || chat.with(|c| c.loading);
    let can_send = move || draft.with(|text| chat.with(|c| c.can_send(text)));

    view! {
        <div class="panel chat-panel" data-testid="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                <Show when=move || chat.with(ChatState::show_quick_questions)>
                    <div class="chat-panel__empty">
                        <p class="chat-panel__hint">"Ask anything about US politics, votes, finance, legislation..."</p>
                        <div class="chat-panel__suggestions">
                            {QUICK_QUESTIONS
                                .iter()
                                .enumerate()
                                .map(|(i, question)| {
                                    let question = *question;
                                    view! {
                                        <button
                                            class="chat-panel__suggestion"
                                            data-testid=format!("quick-question-{i}")
                                            on:click=move |_| draft.set(question.to_owned())
                                        >
                                            {question}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </Show>

                {move || chat.with(|c| c.messages.iter().map(message_view).collect::<Vec<_>>())}

                <Show when=loading>
                    <div class="chat-panel__typing" aria-label="Waiting for reply">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </Show>
            </div>

            <form class="chat-panel__input-row" on:submit=on_submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about congressional votes, campaign finance, legislation..."
                    data-testid="chat-input"
                    disabled=loading
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    type="submit"
                    data-testid="chat-submit"
                    disabled=move || !can_send()
                >
                    {move || if loading() { "Sending..." } else { "Send" }}
                </button>
            </form>
        </div>
    }
}

fn message_view(msg: &ChatMessage) -> AnyView {
    let is_user = msg.role == ChatRole::User;
    let is_assistant = !is_user;

    let body = if is_assistant {
        let rendered = render_markdown_html(&msg.content);
        view! { <div class="chat-panel__markdown" inner_html=rendered></div> }.into_any()
    } else {
        view! { <p class="chat-panel__text">{msg.content.clone()}</p> }.into_any()
    };

    let sources = (!msg.sources.is_empty()).then(|| {
        let joined = join_sources(&msg.sources);
        view! { <p class="chat-panel__sources">"Sources: " {joined}</p> }
    });

    view! {
        <div
            class="chat-panel__message"
            class:chat-panel__message--user=is_user
            class:chat-panel__message--assistant=is_assistant
        >
            {body}
            {sources}
        </div>
    }
    .into_any()
}
