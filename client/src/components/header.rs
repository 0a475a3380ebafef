//! Hub header: brand, navigation, backend status, and theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn Header(ui: RwSignal<UiState>) -> impl IntoView {
    // Sync the stored theme preference once the page is live.
    Effect::new(move || {
        let dark = theme::read_preference();
        theme::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    let health = move || ui.with(|u| u.health);
    let dot_class = move || format!("hub-header__status-dot hub-header__status-dot--{}", health().tone());

    let on_toggle_theme = move |_| {
        let current = ui.get_untracked().dark_mode;
        let next = theme::toggle(current);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="hub-header">
            <div class="hub-header__brand">
                <span class="hub-header__logo">"🛡"</span>
                <div>
                    <h1 class="hub-header__title">"CLAUDE FOR MAYOR"</h1>
                    <p class="hub-header__tagline">"AI DEMOCRACY & TRANSPARENCY HUB"</p>
                </div>
            </div>
            <nav class="hub-header__nav">
                <span class="hub-header__status" title=move || health().label()>
                    <span class=dot_class></span>
                    <span class="hub-header__status-label">{move || health().label()}</span>
                </span>
                <a href="/somaliscan" class="btn hub-header__link" data-testid="nav-somaliscan">
                    "SomaliScan"
                </a>
                <button
                    class="btn hub-header__theme-toggle"
                    title="Toggle dark mode"
                    on:click=on_toggle_theme
                >
                    {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
                </button>
            </nav>
        </header>
    }
}
