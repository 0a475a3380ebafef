//! Political calendar panel state.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use std::fmt::Display;

use super::request::{RequestSlot, RequestTicket};
use crate::net::types::CalendarData;

pub const CALENDAR_ERROR_MESSAGE: &str = "Failed to fetch calendar.";

#[derive(Clone, Debug, Default)]
pub struct CalendarState {
    pub result: RequestSlot<CalendarData>,
}

impl CalendarState {
    /// Start a (re)load; a no-op while one is in flight.
    pub fn load(&mut self) -> Option<RequestTicket> {
        self.result.begin()
    }

    pub fn finish<E: Display>(&mut self, ticket: RequestTicket, result: Result<CalendarData, E>) -> bool {
        self.result.resolve(ticket, result, CALENDAR_ERROR_MESSAGE)
    }

    /// Whether the manual load trigger should be shown instead of a result.
    pub fn awaiting_first_load(&self) -> bool {
        self.result.is_idle()
    }
}
