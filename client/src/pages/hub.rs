//! Hub page: header, introduction, tab bar, and the active panel.
//!
//! ARCHITECTURE
//! ============
//! Panel state lives in the App-level `HubState`, not in the panels, so a
//! request started on one tab keeps running (and its result is kept) while
//! another tab is shown. Only the active panel is mounted.

use leptos::prelude::*;

use crate::components::calendar_panel::CalendarPanel;
use crate::components::chat_panel::ChatPanel;
use crate::components::fact_check_panel::FactCheckPanel;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::issues_panel::IssuesPanel;
use crate::components::leaders_panel::LeadersPanel;
use crate::components::tab_bar::TabBar;
use crate::components::x_post_panel::XPostPanel;
use crate::net::api;
use crate::state::HubState;
use crate::state::ui::{BackendHealth, HubTab};

#[component]
pub fn HubPage() -> impl IntoView {
    let hub = expect_context::<HubState>();
    let ui = hub.ui;

    // Probe backend health once per page load.
    Effect::new(move || {
        if !ui.try_update(|u| u.begin_health_check()).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            let health = BackendHealth::from_probe(api::check_health().await);
            ui.update(|u| u.health = health);
        });
    });

    let active_tab = move || ui.with(|u| u.active_tab);

    view! {
        <div class="hub-page">
            <Header ui=ui/>
            <main class="hub-page__main">
                <Hero/>
                <section class="hub-page__tabs">
                    <TabBar ui=ui/>
                    <div class="hub-page__panel" role="tabpanel">
                        {move || match active_tab() {
                            HubTab::Chat => view! { <ChatPanel chat=hub.chat draft=hub.chat_draft/> }.into_any(),
                            HubTab::FactCheck => {
                                view! { <FactCheckPanel fact_check=hub.fact_check draft=hub.fact_check_draft/> }
                                    .into_any()
                            }
                            HubTab::XPost => view! { <XPostPanel x_post=hub.x_post draft=hub.x_post_draft/> }.into_any(),
                            HubTab::Leaders => view! { <LeadersPanel leaders=hub.leaders/> }.into_any(),
                            HubTab::Issues => view! { <IssuesPanel/> }.into_any(),
                            HubTab::Calendar => view! { <CalendarPanel calendar=hub.calendar/> }.into_any(),
                        }}
                    </div>
                </section>
            </main>
            <footer class="hub-footer">
                <span class="hub-footer__brand">"CLAUDE FOR MAYOR"</span>
                <p class="panel__muted">
                    "Powered by Claude AI • Committed to factual, non-partisan political transparency"
                </p>
                <a href="/somaliscan" class="hub-footer__link">
                    "SomaliScan"
                </a>
            </footer>
        </div>
    }
}
