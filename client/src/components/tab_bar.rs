//! Tab navigation for the hub panels.

use leptos::prelude::*;

use crate::state::ui::{HubTab, UiState};

#[component]
pub fn TabBar(ui: RwSignal<UiState>) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist" data-testid="main-tabs">
            {HubTab::ALL
                .into_iter()
                .map(|tab| {
                    let is_active = move || ui.with(|u| u.active_tab == tab);
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=is_active
                            role="tab"
                            aria-selected=move || if is_active() { "true" } else { "false" }
                            data-testid=format!("tab-{}", tab.id())
                            on:click=move |_| ui.update(|u| u.active_tab = tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
