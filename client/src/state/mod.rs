//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by panel (`chat`, `fact_check`, `x_post`, `leaders`,
//! `calendar`) so each component depends on one small focused model. The
//! request lifecycle they share lives in `request`. Text the user is typing
//! sits in separate draft signals, so keystrokes never re-render results or
//! transcripts. `HubState` bundles the
//! reactive handles; it is created once in `App`, provided via context, and
//! the hub page passes each handle down to its panel as a prop.

pub mod calendar;
pub mod chat;
pub mod fact_check;
pub mod leaders;
pub mod request;
pub mod ui;
pub mod x_post;

use leptos::prelude::*;

use self::calendar::CalendarState;
use self::chat::ChatState;
use self::fact_check::{FactCheckDraft, FactCheckState};
use self::leaders::LeadersState;
use self::ui::UiState;
use self::x_post::{XPostDraft, XPostState};

/// Reactive handles for every panel plus page-level UI chrome.
#[derive(Clone, Copy)]
pub struct HubState {
    pub ui: RwSignal<UiState>,
    pub chat: RwSignal<ChatState>,
    pub chat_draft: RwSignal<String>,
    pub fact_check: RwSignal<FactCheckState>,
    pub fact_check_draft: RwSignal<FactCheckDraft>,
    pub x_post: RwSignal<XPostState>,
    pub x_post_draft: RwSignal<XPostDraft>,
    pub leaders: RwSignal<LeadersState>,
    pub calendar: RwSignal<CalendarState>,
}

impl HubState {
    /// Fresh state for a new page load, including a new chat session id.
    pub fn new() -> Self {
        Self {
            ui: RwSignal::new(UiState::default()),
            chat: RwSignal::new(ChatState::new(chat::new_session_id())),
            chat_draft: RwSignal::new(String::new()),
            fact_check: RwSignal::new(FactCheckState::default()),
            fact_check_draft: RwSignal::new(FactCheckDraft::default()),
            x_post: RwSignal::new(XPostState::default()),
            x_post_draft: RwSignal::new(XPostDraft::default()),
            leaders: RwSignal::new(LeadersState::default()),
            calendar: RwSignal::new(CalendarState::default()),
        }
    }
}

impl Default for HubState {
    fn default() -> Self {
        Self::new()
    }
}
