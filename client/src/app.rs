//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{hub::HubPage, somaliscan::SomaliScanPage};
use crate::state::HubState;
use crate::util::backend::BACKEND_URL_META;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `backend_url` is published as a `<meta>` tag so the hydrated bundle can
/// discover the API host chosen at deploy time.
pub fn shell(options: LeptosOptions, backend_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BACKEND_URL_META content=backend_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the per-panel state once per page load and sets up client-side
/// routing between the hub and the embedded viewer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(HubState::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/democracy-hub.css"/>
        <Title text="Democracy Hub"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HubPage/>
                <Route path=StaticSegment("somaliscan") view=SomaliScanPage/>
            </Routes>
        </Router>
    }
}
