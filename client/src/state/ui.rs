//! Local UI chrome state (active tab, theme, backend health).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the panel states so switching tabs
//! never touches an in-flight request or a stored result.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::fmt::Display;

use super::request::log_failure;
use crate::net::types::HealthStatus;

/// Hub tabs, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HubTab {
    #[default]
    Chat,
    FactCheck,
    XPost,
    Leaders,
    Issues,
    Calendar,
}

impl HubTab {
    pub const ALL: [HubTab; 6] =
        [HubTab::Chat, HubTab::FactCheck, HubTab::XPost, HubTab::Leaders, HubTab::Issues, HubTab::Calendar];

    /// Stable identifier, used for element ids and test hooks.
    pub fn id(self) -> &'static str {
        match self {
            HubTab::Chat => "chat",
            HubTab::FactCheck => "factcheck",
            HubTab::XPost => "xpost",
            HubTab::Leaders => "leaders",
            HubTab::Issues => "issues",
            HubTab::Calendar => "calendar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HubTab::Chat => "Ask Claude",
            HubTab::FactCheck => "Fact Checker",
            HubTab::XPost => "X Post Analyzer",
            HubTab::Leaders => "Leader Updates",
            HubTab::Issues => "Key Issues",
            HubTab::Calendar => "Calendar",
        }
    }
}

/// Reachability of the backend as last observed by `GET /api/health`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendHealth {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl BackendHealth {
    /// Fold a health probe result; any failure or non-"healthy" status is
    /// reported offline.
    pub fn from_probe<E: Display>(result: Result<HealthStatus, E>) -> Self {
        match result {
            Ok(status) if status.status.eq_ignore_ascii_case("healthy") => BackendHealth::Online,
            Ok(status) => {
                log_failure("backend reported unhealthy", &status.status);
                BackendHealth::Offline
            }
            Err(err) => {
                log_failure("health check failed", &err);
                BackendHealth::Offline
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BackendHealth::Unknown => "Checking backend",
            BackendHealth::Online => "Backend online",
            BackendHealth::Offline => "Backend offline",
        }
    }

    /// BEM modifier for the status dot.
    pub fn tone(self) -> &'static str {
        match self {
            BackendHealth::Unknown => "unknown",
            BackendHealth::Online => "online",
            BackendHealth::Offline => "offline",
        }
    }
}

#[derive(Clone, Debug)]
pub struct UiState {
    pub active_tab: HubTab,
    pub dark_mode: bool,
    pub health: BackendHealth,
    /// Set once the hub has issued its health probe for this page load.
    pub health_checked: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { active_tab: HubTab::Chat, dark_mode: true, health: BackendHealth::Unknown, health_checked: false }
    }
}

impl UiState {
    /// Claim the one health probe for this page load.
    pub fn begin_health_check(&mut self) -> bool {
        if self.health_checked {
            return false;
        }
        self.health_checked = true;
        true
    }
}
