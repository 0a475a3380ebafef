use super::*;

fn state() -> ChatState {
    ChatState::new("session-test".to_owned())
}

fn reply(content: &str, sources: &[&str]) -> ChatReply {
    ChatReply {
        content: content.to_owned(),
        sources: sources.iter().map(|s| (*s).to_owned()).collect(),
        timestamp: "2026-01-10T12:00:00Z".to_owned(),
    }
}

#[test]
fn session_id_has_prefix_and_is_unique() {
    let a = new_session_id();
    let b = new_session_id();
    assert!(a.starts_with("session-"));
    assert_eq!(a.len(), "session-".len() + 32);
    assert_ne!(a, b);
}

#[test]
fn blank_draft_is_not_sent() {
    for draft in ["", "   ", "\n\t"] {
        let mut state = state();
        assert!(!state.can_send(draft));
        assert!(state.begin_send(draft, "t0".to_owned()).is_none());
        assert!(!state.loading);
        assert!(state.messages.is_empty());
    }
}

#[test]
fn begin_send_appends_user_entry() {
    let mut state = state();
    let request = state.begin_send("Who won?", "t0".to_owned()).expect("request");

    assert_eq!(request, ChatRequest { session_id: "session-test".to_owned(), message: "Who won?".to_owned() });
    assert!(state.loading);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, ChatRole::User);
    assert_eq!(state.messages[0].content, "Who won?");
    assert_eq!(state.messages[0].timestamp, "t0");
}

#[test]
fn send_while_loading_is_refused() {
    let mut state = state();
    assert!(state.begin_send("first", "t0".to_owned()).is_some());
    assert!(!state.can_send("second"));
    assert!(state.begin_send("second", "t1".to_owned()).is_none());
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn success_grows_transcript_by_two() {
    let mut state = state();
    let before = state.messages.len();
    state.begin_send("hello", "t0".to_owned()).expect("request");
    assert!(state.finish::<String>(Ok(reply("Hi there", &["Congress.gov", "FEC"])), "t1".to_owned()));

    assert_eq!(state.messages.len(), before + 2);
    let last = &state.messages[1];
    assert_eq!(last.role, ChatRole::Assistant);
    assert_eq!(last.content, "Hi there");
    assert_eq!(last.sources, vec!["Congress.gov".to_owned(), "FEC".to_owned()]);
    assert_eq!(last.timestamp, "2026-01-10T12:00:00Z");
    assert!(!state.loading);
}

#[test]
fn failure_grows_transcript_by_two_with_fixed_message() {
    let mut state = state();
    state.begin_send("hello", "t0".to_owned()).expect("request");
    assert!(state.finish::<String>(Err("HTTP 500".to_owned()), "t1".to_owned()));

    assert_eq!(state.messages.len(), 2);
    let last = &state.messages[1];
    assert_eq!(last.role, ChatRole::Assistant);
    assert_eq!(last.content, CHAT_ERROR_MESSAGE);
    assert!(last.sources.is_empty());
    assert_eq!(last.timestamp, "t1");
    assert!(!state.loading);
}

#[test]
fn reply_without_timestamp_uses_local_clock() {
    let mut state = state();
    state.begin_send("hello", "t0".to_owned()).expect("request");
    let mut body = reply("ok", &[]);
    body.timestamp.clear();
    state.finish::<String>(Ok(body), "t1".to_owned());
    assert_eq!(state.messages[1].timestamp, "t1");
}

#[test]
fn finish_without_pending_send_is_ignored() {
    let mut state = state();
    assert!(!state.finish::<String>(Ok(reply("stray", &[])), "t1".to_owned()));
    assert!(state.messages.is_empty());
}

#[test]
fn quick_questions_shown_only_for_empty_transcript() {
    let mut state = state();
    assert!(state.show_quick_questions());
    assert!(state.can_send(QUICK_QUESTIONS[3]));
    state.begin_send(QUICK_QUESTIONS[3], "t0".to_owned()).expect("request");
    assert!(!state.show_quick_questions());
}
