//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host owns no API of its own: the hub talks to the reasoning backend
//! directly from the browser. This router only serves the server-rendered
//! shell, the hydration bundle under `/pkg`, and a liveness probe.


use std::path::{Path, PathBuf};

use axum::Json;
use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde_json::{Value, json};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HubConfig;

/// Directory served at `/pkg`.
fn pkg_dir(site_root_override: Option<&Path>, leptos_site_root: &str) -> PathBuf {
    site_root_override
        .map_or_else(|| PathBuf::from(leptos_site_root), Path::to_path_buf)
        .join("pkg")
}

/// Leptos SSR hub + static bundle + health probe.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &HubConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let shell = {
        let opts = leptos_options.clone();
        let backend_url = config.backend_url.clone();
        move || client::app::shell(opts.clone(), backend_url.clone())
    };

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, shell.clone())
        .fallback(leptos_axum::render_app_to_stream(shell))
        .with_state(leptos_options.clone());

    let pkg_path = pkg_dir(config.site_root.as_deref(), leptos_options.site_root.as_ref());
    tracing::info!(pkg = %pkg_path.display(), "serving static bundle");

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(pkg_path))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok", "service": env!("CARGO_PKG_NAME") }))
}
