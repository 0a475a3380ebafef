use super::*;

#[test]
fn chat_request_serializes_session_and_message() {
    let req = ChatRequest { session_id: "session-1".to_owned(), message: "Who won?".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "session_id": "session-1", "message": "Who won?" })
    );
}

#[test]
fn chat_reply_defaults_missing_sources() {
    let reply: ChatReply = serde_json::from_str(r#"{"content":"hi","timestamp":"t"}"#).unwrap();
    assert!(reply.sources.is_empty());
}

#[test]
fn claim_type_default_is_statement() {
    assert_eq!(ClaimType::default(), ClaimType::Statement);
}

#[test]
fn claim_type_wire_values_match_serde() {
    for kind in ClaimType::ALL {
        assert_eq!(serde_json::to_value(kind).unwrap(), serde_json::json!(kind.as_str()));
    }
}

#[test]
fn fact_check_request_serializes_source_type() {
    let req = FactCheckRequest { claim: "X".to_owned(), source_type: ClaimType::Tweet };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "claim": "X", "source_type": "tweet" })
    );
}

#[test]
fn fact_check_result_parses_backend_payload() {
    let json = r#"{"claim":"X","verdict":"misleading","confidence":0.72,"explanation":"...","sources":["a","b"]}"#;
    let result: FactCheckResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.verdict(), Verdict::Misleading);
    assert_eq!(result.sources, vec!["a".to_owned(), "b".to_owned()]);
    assert!((result.confidence - 0.72).abs() < f64::EPSILON);
    assert!(result.timestamp.is_none());
}

#[test]
fn fact_check_result_keeps_unknown_verdict_text() {
    let json = r#"{"claim":"X","verdict":"unverifiable","confidence":0.5,"explanation":"","sources":[]}"#;
    let result: FactCheckResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.verdict, "unverifiable");
    assert_eq!(result.verdict(), Verdict::Unrecognized("unverifiable".to_owned()));
}

#[test]
fn recent_fact_checks_default_to_empty_list() {
    let recent: RecentFactChecks = serde_json::from_str("{}").unwrap();
    assert!(recent.fact_checks.is_empty());
}

#[test]
fn x_post_request_sends_null_author() {
    let req = XPostRequest { post_content: "post".to_owned(), author: None };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "post_content": "post", "author": null })
    );
}

#[test]
fn x_post_display_author_ignores_blank() {
    let analysis: XPostAnalysis = serde_json::from_str(r#"{"author":"  ","analysis":"a"}"#).unwrap();
    assert_eq!(analysis.display_author(), None);

    let analysis: XPostAnalysis = serde_json::from_str(r#"{"author":"jack","analysis":"a"}"#).unwrap();
    assert_eq!(analysis.display_author(), Some("jack"));

    let analysis: XPostAnalysis = serde_json::from_str(r#"{"analysis":"a"}"#).unwrap();
    assert_eq!(analysis.display_author(), None);
}

#[test]
fn leader_updates_ignore_echoed_party_filter() {
    let json = r#"{"updates":"u","party_filter":"Democratic","timestamp":"2026-01-10T12:00:00+00:00"}"#;
    let updates: LeaderUpdates = serde_json::from_str(json).unwrap();
    assert_eq!(updates.updates, "u");
    assert_eq!(updates.timestamp, "2026-01-10T12:00:00+00:00");
}

#[test]
fn x_post_analysis_keeps_timestamp() {
    let json = r#"{"post_content":"p","analysis":"a","timestamp":"2026-01-10T12:00:00Z"}"#;
    let analysis: XPostAnalysis = serde_json::from_str(json).unwrap();
    assert_eq!(analysis.timestamp.as_deref(), Some("2026-01-10T12:00:00Z"));
}

#[test]
fn calendar_data_requires_calendar_field() {
    assert!(serde_json::from_str::<CalendarData>(r#"{"timestamp":"t"}"#).is_err());
    let data: CalendarData = serde_json::from_str(r#"{"calendar":"Nov 3"}"#).unwrap();
    assert_eq!(data.calendar, "Nov 3");
    assert!(data.timestamp.is_none());
}
