//! Static key-issues briefing.

#[cfg(test)]
#[path = "issues_panel_test.rs"]
mod issues_panel_test;

use leptos::prelude::*;

pub const ISSUES_HEADING: &str = "MAJOR US POLITICAL ISSUES • JANUARY 2026";

/// One briefing entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyIssue {
    pub title: &'static str,
    pub summary: &'static str,
    pub sources: &'static str,
    /// BEM modifier for the accent color and icon.
    pub tone: &'static str,
    pub icon: &'static str,
}

pub const KEY_ISSUES: [KeyIssue; 4] = [
    KeyIssue {
        title: "Economic Pessimism & Cost-of-Living",
        summary: "Majority of Americans expect difficult year ahead: rising costs, unemployment fears, persistent \
                  inflation perception. Consumer confidence remains near recessionary levels despite no official \
                  recession declaration.",
        sources: "Gallup, Marist/NPR/PBS, University of Michigan Surveys",
        tone: "economy",
        icon: "⚠",
    },
    KeyIssue {
        title: "Healthcare Affordability Crisis",
        summary: "Enhanced ACA premium tax credits expired Dec 31, 2025 → average premium increases of ~114% for \
                  many subsidized enrollees. New healthcare frameworks proposed but lack concrete implementation \
                  details.",
        sources: "KFF, NPR, Reuters, White House Statements",
        tone: "health",
        icon: "✚",
    },
    KeyIssue {
        title: "International Trade & Tariffs",
        summary: "Ongoing tariff negotiations and trade policy debates affecting consumer prices and international \
                  relations. Multiple trade agreements under review with potential impacts on manufacturing and \
                  agriculture sectors.",
        sources: "USTR, Congressional Trade Records, Commerce Department",
        tone: "trade",
        icon: "🌐",
    },
    KeyIssue {
        title: "AI Regulation & Technology Policy",
        summary: "Congress debates comprehensive AI legislation affecting tech industry, employment, and national \
                  security. Bipartisan efforts to establish guardrails while maintaining innovation \
                  competitiveness.",
        sources: "Senate Commerce Committee, NIST, White House OSTP",
        tone: "tech",
        icon: "⚖",
    },
];

#[component]
pub fn IssuesPanel() -> impl IntoView {
    view! {
        <div class="panel issues-panel" data-testid="issues-panel">
            <h3 class="issues-panel__heading">{ISSUES_HEADING}</h3>
            <div class="issues-panel__list">
                {KEY_ISSUES
                    .iter()
                    .map(|issue| {
                        view! {
                            <article class=format!("issue-card issue-card--{}", issue.tone)>
                                <span class="issue-card__icon">{issue.icon}</span>
                                <div>
                                    <h4 class="issue-card__title">{issue.title}</h4>
                                    <p class="issue-card__summary">{issue.summary}</p>
                                    <p class="issue-card__sources">{format!("Sources: {}", issue.sources)}</p>
                                </div>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
