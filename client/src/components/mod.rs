//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render hub chrome and one panel per tab. Each panel receives
//! its own state handle as a prop, so panels never reach into each other.

pub mod calendar_panel;
pub mod chat_panel;
pub mod external_frame;
pub mod fact_check_panel;
pub mod header;
pub mod hero;
pub mod issues_panel;
pub mod leaders_panel;
pub mod tab_bar;
pub mod x_post_panel;
