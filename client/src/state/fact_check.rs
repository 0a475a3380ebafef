//! Fact-check panel state.
//!
//! The main result and the "recent checks" list are independent slots, so a
//! failing history load never hides a verdict and vice versa. The claim being
//! typed is a separate [`FactCheckDraft`] held in its own signal.

#[cfg(test)]
#[path = "fact_check_test.rs"]
mod fact_check_test;

use std::fmt::Display;

use super::request::{RequestSlot, RequestTicket};
use crate::net::types::{ClaimType, FactCheckRequest, FactCheckResult, RecentFactChecks};

pub const FACT_CHECK_ERROR_MESSAGE: &str = "Failed to fact-check. Please try again.";
pub const RECENT_ERROR_MESSAGE: &str = "Failed to load recent fact checks.";

/// Number of stored checks requested for the history list.
pub const RECENT_LIMIT: u32 = 5;

/// Claim text and type as currently entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FactCheckDraft {
    pub claim: String,
    pub claim_type: ClaimType,
}

impl FactCheckDraft {
    /// Request body for this draft, or `None` for a blank claim. The claim
    /// text is sent as typed.
    pub fn request(&self) -> Option<FactCheckRequest> {
        if self.claim.trim().is_empty() {
            return None;
        }
        Some(FactCheckRequest { claim: self.claim.clone(), source_type: self.claim_type })
    }
}

#[derive(Clone, Debug, Default)]
pub struct FactCheckState {
    pub result: RequestSlot<FactCheckResult>,
    pub recent: RequestSlot<Vec<FactCheckResult>>,
}

impl FactCheckState {
    /// Start a check of `draft`. Refused for blank claims and while a check
    /// is in flight.
    pub fn begin_check(&mut self, draft: &FactCheckDraft) -> Option<(RequestTicket, FactCheckRequest)> {
        let request = draft.request()?;
        let ticket = self.result.begin()?;
        Some((ticket, request))
    }

    pub fn finish_check<E: Display>(&mut self, ticket: RequestTicket, result: Result<FactCheckResult, E>) -> bool {
        self.result.resolve(ticket, result, FACT_CHECK_ERROR_MESSAGE)
    }

    /// User-triggered history load; ignored while one is in flight.
    pub fn begin_recent(&mut self) -> Option<RequestTicket> {
        self.recent.begin()
    }

    /// History reload after a stored check.
    ///
    /// `None` while the history has never been opened. An in-flight load is
    /// superseded, since it may predate the check just stored.
    pub fn refresh_recent(&mut self) -> Option<RequestTicket> {
        if self.recent.is_idle() {
            return None;
        }
        Some(self.recent.supersede())
    }

    pub fn finish_recent<E: Display>(&mut self, ticket: RequestTicket, result: Result<RecentFactChecks, E>) -> bool {
        self.recent.resolve(ticket, result.map(|r| r.fact_checks), RECENT_ERROR_MESSAGE)
    }
}
