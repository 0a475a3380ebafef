//! Hub introduction: mission statement and data-source summary.

use leptos::prelude::*;

const MISSION_CARDS: [(&str, &str, &str); 3] = [
    ("Radical Transparency", "Every source cited, every claim verifiable", "purple"),
    ("Non-Partisan Analysis", "Facts over faction, data over dogma", "teal"),
    ("Democratic Access", "Complex governance made accessible", "terracotta"),
];

const DATA_SOURCES: [(&str, &str); 4] = [
    ("Congress Voting Records", "50+ years"),
    ("Campaign Finance Data", "Real-time"),
    ("Public Statements", "100K+ speeches"),
    ("Government Records", "All branches"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <p class="hero__badge">"Powered by Claude AI"</p>
            <h2 class="hero__title">
                <span>"Democracy"</span>
                <br/>
                <span class="hero__title-accent">"Meets Intelligence"</span>
            </h2>
            <p class="hero__lede">
                "Access congressional votes, campaign finance, official statements, and real-time fact-checking, "
                "all powered by AI that's transparent about its sources."
            </p>

            <div class="hero__missions">
                {MISSION_CARDS
                    .iter()
                    .map(|(title, desc, tone)| {
                        view! {
                            <div class=format!("mission-card mission-card--{tone}")>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="hero__sources">
                <h3>"Our Data Sources"</h3>
                <div class="hero__source-grid">
                    {DATA_SOURCES
                        .iter()
                        .map(|(name, coverage)| {
                            view! {
                                <div class="hero__source">
                                    <p class="hero__source-name">{*name}</p>
                                    <p class="panel__muted">{*coverage}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
