//! Wire types for the hub backend REST API.
//!
//! DESIGN
//! ======
//! Requests mirror the backend's JSON bodies exactly. Response fields the UI
//! can live without are `#[serde(default)]` so a sparse upstream payload still
//! renders instead of failing the whole panel.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::verdict::Verdict;

/// `POST /api/chat` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

/// `POST /api/chat` success body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatReply {
    pub content: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub timestamp: String,
}

/// Kind of text submitted to the fact checker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    #[default]
    Statement,
    Tweet,
    Article,
    Speech,
}

impl ClaimType {
    pub const ALL: [ClaimType; 4] = [ClaimType::Statement, ClaimType::Tweet, ClaimType::Article, ClaimType::Speech];

    /// Wire value sent as `source_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            ClaimType::Statement => "statement",
            ClaimType::Tweet => "tweet",
            ClaimType::Article => "article",
            ClaimType::Speech => "speech",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClaimType::Statement => "Statement",
            ClaimType::Tweet => "Tweet",
            ClaimType::Article => "Article",
            ClaimType::Speech => "Speech",
        }
    }
}

/// `POST /api/fact-check` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FactCheckRequest {
    pub claim: String,
    pub source_type: ClaimType,
}

/// Fact-check outcome, returned by `POST /api/fact-check` and listed by
/// `GET /api/recent-fact-checks`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FactCheckResult {
    pub claim: String,
    pub verdict: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl FactCheckResult {
    /// Typed verdict; unknown labels map to [`Verdict::Unrecognized`].
    pub fn verdict(&self) -> Verdict {
        Verdict::parse(&self.verdict)
    }
}

/// `GET /api/recent-fact-checks` success body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecentFactChecks {
    #[serde(default)]
    pub fact_checks: Vec<FactCheckResult>,
}

/// `POST /api/analyze-x-post` body. A blank author is sent as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct XPostRequest {
    pub post_content: String,
    pub author: Option<String>,
}

/// `POST /api/analyze-x-post` success body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct XPostAnalysis {
    #[serde(default)]
    pub author: Option<String>,
    pub analysis: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl XPostAnalysis {
    /// Author to display, if the backend echoed a non-blank one.
    pub fn display_author(&self) -> Option<&str> {
        self.author.as_deref().map(str::trim).filter(|a| !a.is_empty())
    }
}

/// `GET /api/leader-updates` success body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LeaderUpdates {
    pub updates: String,
    #[serde(default)]
    pub timestamp: String,
}

/// `GET /api/political-calendar` success body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CalendarData {
    pub calendar: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// `GET /api/health` success body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
