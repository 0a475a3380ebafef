//! REST API helpers for the hub backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the base URL
//! from [`backend_base_url`](crate::util::backend::backend_base_url).
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Any transport failure, non-2xx status, or undecodable body becomes an
//! `ApiError`. The response body of a failed call is never inspected; panels
//! turn every error into their own fixed message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    CalendarData, ChatReply, ChatRequest, FactCheckRequest, FactCheckResult, HealthStatus, LeaderUpdates,
    RecentFactChecks, XPostAnalysis, XPostRequest,
};

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("backend API is only reachable from the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn leader_updates_endpoint(base: &str, party: Option<&str>) -> String {
    match party {
        Some(party) => endpoint(base, &format!("/api/leader-updates?party={party}")),
        None => endpoint(base, "/api/leader-updates"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn recent_fact_checks_endpoint(base: &str, limit: u32) -> String {
    endpoint(base, &format!("/api/recent-fact-checks?limit={limit}"))
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

/// Send one chat turn via `POST /api/chat`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or bad body.
pub async fn send_chat(request: &ChatRequest) -> Result<ChatReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&crate::util::backend::backend_base_url(), "/api/chat");
        post_json(&url, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Check a claim via `POST /api/fact-check`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or bad body.
pub async fn fact_check(request: &FactCheckRequest) -> Result<FactCheckResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&crate::util::backend::backend_base_url(), "/api/fact-check");
        post_json(&url, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Analyze a social post via `POST /api/analyze-x-post`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or bad body.
pub async fn analyze_x_post(request: &XPostRequest) -> Result<XPostAnalysis, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&crate::util::backend::backend_base_url(), "/api/analyze-x-post");
        post_json(&url, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch leader updates, optionally scoped to one party.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or bad body.
pub async fn fetch_leader_updates(party: Option<&str>) -> Result<LeaderUpdates, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = leader_updates_endpoint(&crate::util::backend::backend_base_url(), party);
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = party;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the political calendar via `GET /api/political-calendar`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or bad body.
pub async fn fetch_political_calendar() -> Result<CalendarData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&crate::util::backend::backend_base_url(), "/api/political-calendar");
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the most recent stored fact checks.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or bad body.
pub async fn fetch_recent_fact_checks(limit: u32) -> Result<RecentFactChecks, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = recent_fact_checks_endpoint(&crate::util::backend::backend_base_url(), limit);
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Err(ApiError::Unavailable)
    }
}

/// Probe `GET /api/health`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or bad body.
pub async fn check_health() -> Result<HealthStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&crate::util::backend::backend_base_url(), "/api/health");
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
