//! Embedded SomaliScan viewer page.

use leptos::prelude::*;

use crate::components::external_frame::ExternalFrame;

pub const SOMALISCAN_URL: &str = "https://somaliscan.com";

#[component]
pub fn SomaliScanPage() -> impl IntoView {
    view! {
        <div class="viewer-page">
            <header class="viewer-page__header">
                <a href="/" class="btn viewer-page__back" data-testid="back-home">
                    "← Back to Hub"
                </a>
                <span class="hub-header__title">"CLAUDE FOR MAYOR"</span>
            </header>
            <main class="viewer-page__main">
                <div class="viewer-page__intro">
                    <h1>"SomaliScan"</h1>
                    <p>"Access the SomaliScan platform directly within the Claude for Mayor Democracy Hub"</p>
                </div>
                <ExternalFrame url=SOMALISCAN_URL title="SomaliScan"/>
            </main>
        </div>
    }
}
