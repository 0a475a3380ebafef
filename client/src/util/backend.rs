//! Backend base URL resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host reads `HUB_BACKEND_URL` at startup and renders it into a
//! `<meta name="hub-backend-url">` tag in the shell. In the browser that tag
//! wins; a compile-time `HUB_BACKEND_URL` is the fallback, then the empty
//! string, which makes every request same-origin (`/api/...`).

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

/// Name of the shell meta tag carrying the backend base URL.
pub const BACKEND_URL_META: &str = "hub-backend-url";

/// Trim whitespace and trailing slashes so endpoint paths can be appended.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// Resolve the backend base URL for API calls.
pub fn backend_base_url() -> String {
    let runtime = read_meta_tag();
    let raw = runtime
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .or(option_env!("HUB_BACKEND_URL"))
        .unwrap_or_default();
    normalize_base_url(raw)
}

fn read_meta_tag() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let doc = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{BACKEND_URL_META}\"]");
        let el = doc.query_selector(&selector).ok()??;
        let meta = el.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
        Some(meta.content())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
