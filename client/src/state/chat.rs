//! Chat panel state: session identity and the transcript.
//!
//! DESIGN
//! ======
//! The draft lives in its own signal so typing never notifies transcript
//! subscribers. The transcript is append-only. A send appends the user entry immediately
//! and exactly one assistant entry when the request settles, so every
//! accepted send grows the transcript by two. Sends are coalesced: while a
//! reply is pending further sends are refused.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::fmt::Display;

use super::request::log_failure;
use crate::net::types::{ChatReply, ChatRequest};

/// Assistant entry appended when a chat request fails.
pub const CHAT_ERROR_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Suggestions shown while the transcript is empty.
pub const QUICK_QUESTIONS: [&str; 4] = [
    "How did Congress vote on the latest infrastructure bill?",
    "What is the current approval rating of the President?",
    "Who are the top campaign donors in 2026?",
    "What bills are currently pending in the Senate?",
];

/// Generate the per-page-load chat session identifier.
pub fn new_session_id() -> String {
    format!("session-{}", uuid::Uuid::new_v4().simple())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// Citations; always empty for user entries.
    pub sources: Vec<String>,
    pub timestamp: String,
}

#[derive(Clone, Debug)]
pub struct ChatState {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl ChatState {
    pub fn new(session_id: String) -> Self {
        Self { session_id, messages: Vec::new(), loading: false }
    }

    /// Whether `draft` may be sent right now.
    pub fn can_send(&self, draft: &str) -> bool {
        !self.loading && !draft.trim().is_empty()
    }

    /// Accept `draft` for sending.
    ///
    /// Returns `None` when the draft is blank or a reply is still pending.
    /// Otherwise appends the user entry and returns the request body to post;
    /// the caller clears its draft only in that case.
    pub fn begin_send(&mut self, draft: &str, now: String) -> Option<ChatRequest> {
        if !self.can_send(draft) {
            return None;
        }
        let message = draft.to_owned();
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: message.clone(),
            sources: Vec::new(),
            timestamp: now,
        });
        self.loading = true;
        Some(ChatRequest { session_id: self.session_id.clone(), message })
    }

    /// Append the assistant entry for the pending send.
    ///
    /// Returns `false` if no send is pending.
    pub fn finish<E: Display>(&mut self, result: Result<ChatReply, E>, now: String) -> bool {
        if !self.loading {
            return false;
        }
        self.loading = false;
        let entry = match result {
            Ok(reply) => ChatMessage {
                role: ChatRole::Assistant,
                content: reply.content,
                sources: reply.sources,
                timestamp: if reply.timestamp.is_empty() { now } else { reply.timestamp },
            },
            Err(err) => {
                log_failure("chat request failed", &err);
                ChatMessage {
                    role: ChatRole::Assistant,
                    content: CHAT_ERROR_MESSAGE.to_owned(),
                    sources: Vec::new(),
                    timestamp: now,
                }
            }
        };
        self.messages.push(entry);
        true
    }

    pub fn show_quick_questions(&self) -> bool {
        self.messages.is_empty()
    }
}
