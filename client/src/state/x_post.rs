//! X post analyzer panel state.

#[cfg(test)]
#[path = "x_post_test.rs"]
mod x_post_test;

use std::fmt::Display;

use super::request::{RequestSlot, RequestTicket};
use crate::net::types::{XPostAnalysis, XPostRequest};

pub const X_POST_ERROR_MESSAGE: &str = "Failed to analyze. Please try again.";

/// Post text and optional author as currently entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XPostDraft {
    pub author: String,
    pub content: String,
}

impl XPostDraft {
    /// Request body for this draft. Post content is required; a blank author
    /// is sent as `null`.
    pub fn request(&self) -> Option<XPostRequest> {
        if self.content.trim().is_empty() {
            return None;
        }
        let author = Some(self.author.trim()).filter(|a| !a.is_empty()).map(str::to_owned);
        Some(XPostRequest { post_content: self.content.clone(), author })
    }
}

#[derive(Clone, Debug, Default)]
pub struct XPostState {
    pub result: RequestSlot<XPostAnalysis>,
}

impl XPostState {
    pub fn begin_analyze(&mut self, draft: &XPostDraft) -> Option<(RequestTicket, XPostRequest)> {
        let request = draft.request()?;
        let ticket = self.result.begin()?;
        Some((ticket, request))
    }

    pub fn finish_analyze<E: Display>(&mut self, ticket: RequestTicket, result: Result<XPostAnalysis, E>) -> bool {
        self.result.resolve(ticket, result, X_POST_ERROR_MESSAGE)
    }
}
