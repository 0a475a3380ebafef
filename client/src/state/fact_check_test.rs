use super::*;
use crate::util::format::confidence_percent;
use crate::util::verdict::Verdict;

fn wire_result() -> FactCheckResult {
    serde_json::from_str(
        r#"{"claim":"X","verdict":"misleading","confidence":0.72,"explanation":"Partly accurate.","sources":["a","b"]}"#,
    )
    .expect("valid fact-check body")
}

fn draft(claim: &str) -> FactCheckDraft {
    FactCheckDraft { claim: claim.to_owned(), ..FactCheckDraft::default() }
}

fn recent_body(claims: &[&str]) -> RecentFactChecks {
    let fact_checks = claims
        .iter()
        .map(|claim| {
            let mut check = wire_result();
            (*claim).clone_into(&mut check.claim);
            check
        })
        .collect();
    RecentFactChecks { fact_checks }
}

#[test]
fn blank_claim_issues_no_request() {
    let mut state = FactCheckState::default();
    assert!(draft("   ").request().is_none());
    assert!(state.begin_check(&draft("   ")).is_none());
    assert!(state.result.is_idle());
}

#[test]
fn begin_check_sends_claim_and_selected_type() {
    let mut state = FactCheckState::default();
    let draft = FactCheckDraft { claim: "X".to_owned(), claim_type: ClaimType::Tweet };
    let (_, request) = state.begin_check(&draft).expect("request");
    assert_eq!(request, FactCheckRequest { claim: "X".to_owned(), source_type: ClaimType::Tweet });
    assert!(state.result.is_loading());
}

#[test]
fn check_while_loading_is_refused() {
    let mut state = FactCheckState::default();
    assert!(state.begin_check(&draft("X")).is_some());
    assert!(state.begin_check(&draft("X")).is_none());
}

#[test]
fn wire_scenario_renders_percent_and_ordered_sources() {
    let mut state = FactCheckState::default();
    let draft = FactCheckDraft { claim: "X".to_owned(), claim_type: ClaimType::Tweet };
    let (ticket, _) = state.begin_check(&draft).expect("request");
    assert!(state.finish_check::<String>(ticket, Ok(wire_result())));

    let result = state.result.value().expect("stored result");
    assert_eq!(result.verdict(), Verdict::Misleading);
    assert_eq!(result.verdict().style().tone, "misleading");
    assert_eq!(confidence_percent(result.confidence), "72%");
    assert_eq!(result.sources, vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn failure_stores_fixed_message() {
    let mut state = FactCheckState::default();
    let (ticket, _) = state.begin_check(&draft("X")).expect("request");
    state.finish_check::<String>(ticket, Err("HTTP 502".to_owned()));
    assert_eq!(state.result.error(), Some(FACT_CHECK_ERROR_MESSAGE));
    assert!(state.result.value().is_none());
}

#[test]
fn new_check_clears_previous_result() {
    let mut state = FactCheckState::default();
    let (ticket, _) = state.begin_check(&draft("X")).expect("request");
    state.finish_check::<String>(ticket, Ok(wire_result()));
    state.begin_check(&draft("X")).expect("second request");
    assert!(state.result.value().is_none());
    assert!(state.result.is_loading());
}

#[test]
fn recent_failure_does_not_touch_main_result() {
    let mut state = FactCheckState::default();
    let (ticket, _) = state.begin_check(&draft("X")).expect("request");
    state.finish_check::<String>(ticket, Ok(wire_result()));

    let recent = state.begin_recent().expect("recent ticket");
    state.finish_recent::<String>(recent, Err("offline".to_owned()));

    assert_eq!(state.recent.error(), Some(RECENT_ERROR_MESSAGE));
    assert!(state.result.value().is_some());
}

#[test]
fn recent_success_keeps_backend_order() {
    let mut state = FactCheckState::default();
    let ticket = state.begin_recent().expect("recent ticket");
    state.finish_recent::<String>(ticket, Ok(recent_body(&["X", "older"])));

    let claims: Vec<&str> = state.recent.value().expect("list").iter().map(|r| r.claim.as_str()).collect();
    assert_eq!(claims, vec!["X", "older"]);
}

// =============================================================
// History refresh after a check
// =============================================================

#[test]
fn refresh_skipped_while_history_never_opened() {
    let mut state = FactCheckState::default();
    assert!(state.refresh_recent().is_none());
    assert!(state.recent.is_idle());
}

#[test]
fn refresh_after_check_reloads_open_history() {
    let mut state = FactCheckState::default();
    let ticket = state.begin_recent().expect("recent ticket");
    state.finish_recent::<String>(ticket, Ok(recent_body(&["older"])));

    let refresh = state.refresh_recent().expect("refresh ticket");
    assert!(state.recent.is_loading());
    assert!(state.finish_recent::<String>(refresh, Ok(recent_body(&["X", "older"]))));
    assert_eq!(state.recent.value().map(Vec::len), Some(2));
}

#[test]
fn refresh_supersedes_history_load_in_flight() {
    let mut state = FactCheckState::default();
    let in_flight = state.begin_recent().expect("recent ticket");
    assert!(state.begin_recent().is_none());

    let refresh = state.refresh_recent().expect("refresh ticket");
    assert!(!state.finish_recent::<String>(in_flight, Ok(recent_body(&["older"]))));
    assert!(state.recent.is_loading());

    assert!(state.finish_recent::<String>(refresh, Ok(recent_body(&["X", "older"]))));
    let claims: Vec<&str> = state.recent.value().expect("list").iter().map(|r| r.claim.as_str()).collect();
    assert_eq!(claims, vec!["X", "older"]);
}
