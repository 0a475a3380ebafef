use super::*;

// =============================================================
// HubTab
// =============================================================

#[test]
fn default_tab_is_chat() {
    assert_eq!(UiState::default().active_tab, HubTab::Chat);
    assert_eq!(HubTab::default(), HubTab::Chat);
}

#[test]
fn tab_ids_are_stable() {
    let ids: Vec<&str> = HubTab::ALL.iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["chat", "factcheck", "xpost", "leaders", "issues", "calendar"]);
}

#[test]
fn tab_labels() {
    assert_eq!(HubTab::Chat.label(), "Ask Claude");
    assert_eq!(HubTab::XPost.label(), "X Post Analyzer");
    assert_eq!(HubTab::Issues.label(), "Key Issues");
}

// =============================================================
// BackendHealth
// =============================================================

#[test]
fn healthy_probe_is_online() {
    let status = HealthStatus { status: "healthy".to_owned() };
    assert_eq!(BackendHealth::from_probe::<String>(Ok(status)), BackendHealth::Online);
}

#[test]
fn unhealthy_or_failed_probe_is_offline() {
    let status = HealthStatus { status: "degraded".to_owned() };
    assert_eq!(BackendHealth::from_probe::<String>(Ok(status)), BackendHealth::Offline);
    assert_eq!(BackendHealth::from_probe::<String>(Err("refused".to_owned())), BackendHealth::Offline);
}

#[test]
fn health_probe_is_claimed_once() {
    let mut state = UiState::default();
    assert_eq!(state.health, BackendHealth::Unknown);
    assert!(state.begin_health_check());
    assert!(!state.begin_health_check());
}

#[test]
fn default_theme_is_dark() {
    assert!(UiState::default().dark_mode);
}
