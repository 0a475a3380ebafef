use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://localhost:8001", "/api/chat"), "http://localhost:8001/api/chat");
    assert_eq!(endpoint("", "/api/health"), "/api/health");
}

#[test]
fn leader_updates_endpoint_omits_party_for_all() {
    assert_eq!(leader_updates_endpoint("https://hub.example", None), "https://hub.example/api/leader-updates");
}

#[test]
fn leader_updates_endpoint_adds_party_query() {
    assert_eq!(leader_updates_endpoint("", Some("Republican")), "/api/leader-updates?party=Republican");
    assert_eq!(leader_updates_endpoint("", Some("Democratic")), "/api/leader-updates?party=Democratic");
}

#[test]
fn recent_fact_checks_endpoint_carries_limit() {
    assert_eq!(recent_fact_checks_endpoint("", 5), "/api/recent-fact-checks?limit=5");
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(502).to_string(), "unexpected status 502");
    assert_eq!(ApiError::Network("refused".to_owned()).to_string(), "network error: refused");
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn calls_are_unavailable_outside_browser() {
    assert_eq!(check_health().await, Err(ApiError::Unavailable));
    assert_eq!(fetch_political_calendar().await, Err(ApiError::Unavailable));
    let request = ChatRequest { session_id: "session-x".to_owned(), message: "hi".to_owned() };
    assert_eq!(send_chat(&request).await, Err(ApiError::Unavailable));
}
