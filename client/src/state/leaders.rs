//! Leader updates panel state.
//!
//! DESIGN
//! ======
//! Switching filters while a request is in flight supersedes it: the new
//! filter becomes active immediately and the older response is discarded
//! when it lands. Re-clicking the filter that is already loading does
//! nothing.

#[cfg(test)]
#[path = "leaders_test.rs"]
mod leaders_test;

use std::fmt::Display;

use super::request::{RequestSlot, RequestTicket};
use crate::net::types::LeaderUpdates;

pub const LEADERS_ERROR_MESSAGE: &str = "Failed to fetch updates.";

/// Party scope of a leader updates request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PartyFilter {
    #[default]
    All,
    Democratic,
    Republican,
}

impl PartyFilter {
    pub const ALL: [PartyFilter; 3] = [PartyFilter::All, PartyFilter::Democratic, PartyFilter::Republican];

    /// Value of the `party` query parameter; `None` omits the parameter.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            PartyFilter::All => None,
            PartyFilter::Democratic => Some("Democratic"),
            PartyFilter::Republican => Some("Republican"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PartyFilter::All => "All Leaders",
            PartyFilter::Democratic => "Democrats",
            PartyFilter::Republican => "Republicans",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LeadersState {
    /// Filter of the latest request; `None` until the first load.
    pub active: Option<PartyFilter>,
    pub result: RequestSlot<LeaderUpdates>,
}

impl LeadersState {
    pub fn load(&mut self, filter: PartyFilter) -> Option<RequestTicket> {
        if self.result.is_loading() && self.active == Some(filter) {
            return None;
        }
        self.active = Some(filter);
        Some(self.result.supersede())
    }

    pub fn finish<E: Display>(&mut self, ticket: RequestTicket, result: Result<LeaderUpdates, E>) -> bool {
        self.result.resolve(ticket, result, LEADERS_ERROR_MESSAGE)
    }

    pub fn is_active(&self, filter: PartyFilter) -> bool {
        self.active == Some(filter)
    }
}
