//! Fact-check verdict classification and its presentation bundle.
//!
//! The backend's verdict label is free text. Anything other than the three
//! recognized labels falls through to a neutral style, so the mapping is
//! total over all strings.

#[cfg(test)]
#[path = "verdict_test.rs"]
mod verdict_test;

/// Categorical fact-check outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    True,
    False,
    Misleading,
    /// Any other label, kept verbatim for display.
    Unrecognized(String),
}

/// Visual treatment of a verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerdictStyle {
    /// BEM modifier appended to `verdict--`.
    pub tone: &'static str,
    /// Glyph shown next to the verdict label.
    pub icon: &'static str,
}

impl VerdictStyle {
    pub fn class(self) -> String {
        format!("verdict verdict--{}", self.tone)
    }
}

const TRUE_STYLE: VerdictStyle = VerdictStyle { tone: "true", icon: "✔" };
const FALSE_STYLE: VerdictStyle = VerdictStyle { tone: "false", icon: "✖" };
const MISLEADING_STYLE: VerdictStyle = VerdictStyle { tone: "misleading", icon: "⚠" };
const NEUTRAL_STYLE: VerdictStyle = VerdictStyle { tone: "unknown", icon: "ℹ" };

impl Verdict {
    /// Case-insensitive parse; surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" => Verdict::True,
            "false" => Verdict::False,
            "misleading" => Verdict::Misleading,
            _ => Verdict::Unrecognized(raw.to_owned()),
        }
    }

    pub fn style(&self) -> VerdictStyle {
        match self {
            Verdict::True => TRUE_STYLE,
            Verdict::False => FALSE_STYLE,
            Verdict::Misleading => MISLEADING_STYLE,
            Verdict::Unrecognized(_) => NEUTRAL_STYLE,
        }
    }

    /// Uppercased label for display; unrecognized labels keep their text.
    pub fn label(&self) -> String {
        match self {
            Verdict::True => "TRUE".to_owned(),
            Verdict::False => "FALSE".to_owned(),
            Verdict::Misleading => "MISLEADING".to_owned(),
            Verdict::Unrecognized(raw) if raw.trim().is_empty() => "UNKNOWN".to_owned(),
            Verdict::Unrecognized(raw) => raw.trim().to_uppercase(),
        }
    }
}

/// Style bundle for a raw verdict label.
pub fn style_for(verdict: &str) -> VerdictStyle {
    Verdict::parse(verdict).style()
}
