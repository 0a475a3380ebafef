//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod backend;
pub mod clock;
pub mod format;
pub mod markdown;
pub mod theme;
pub mod verdict;
