//! Request lifecycle shared by every async panel.
//!
//! DESIGN
//! ======
//! A slot walks `Idle -> Loading -> {Success | Error}` and back to `Loading`
//! on the next trigger. `begin` is the coalescing guard: it refuses to start
//! while a request is in flight. `supersede` starts a new request even while
//! loading and bumps the ticket so the older response is discarded when it
//! lands. Only the latest ticket may resolve the slot.
//!
//! ERROR HANDLING
//! ==============
//! The raw error is logged and replaced by the panel's fixed fallback message;
//! server detail never reaches the UI.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::fmt::Display;

/// Identifies one issued request of a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Observable phase of a request slot.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestPhase<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

/// Single-result request slot with a coalescing guard and stale-response
/// rejection.
#[derive(Clone, Debug)]
pub struct RequestSlot<T> {
    phase: RequestPhase<T>,
    latest: u64,
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        Self { phase: RequestPhase::Idle, latest: 0 }
    }
}

impl<T> RequestSlot<T> {
    pub fn phase(&self) -> &RequestPhase<T> {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, RequestPhase::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, RequestPhase::Loading)
    }

    /// The successful value, if the last request succeeded.
    pub fn value(&self) -> Option<&T> {
        match &self.phase {
            RequestPhase::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The fallback message, if the last request failed.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            RequestPhase::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Start a request unless one is already in flight.
    ///
    /// Clears the previous result or error.
    pub fn begin(&mut self) -> Option<RequestTicket> {
        if self.is_loading() {
            return None;
        }
        Some(self.supersede())
    }

    /// Start a request unconditionally; any in-flight ticket becomes stale.
    pub fn supersede(&mut self) -> RequestTicket {
        self.latest += 1;
        self.phase = RequestPhase::Loading;
        RequestTicket(self.latest)
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Apply a response. Returns `false` (and changes nothing) for stale
    /// tickets.
    pub fn resolve<E: Display>(&mut self, ticket: RequestTicket, result: Result<T, E>, fallback: &str) -> bool {
        if !self.is_current(ticket) || !self.is_loading() {
            return false;
        }
        self.phase = match result {
            Ok(value) => RequestPhase::Success(value),
            Err(err) => {
                log_failure(fallback, &err);
                RequestPhase::Error(fallback.to_owned())
            }
        };
        true
    }
}

pub(crate) fn log_failure<E: Display>(context: &str, err: &E) {
    #[cfg(feature = "hydrate")]
    log::warn!("{context} ({err})");
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (context, err);
    }
}
