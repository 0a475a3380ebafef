use super::*;

#[test]
fn four_issues_in_briefing_order() {
    let titles: Vec<&str> = KEY_ISSUES.iter().map(|i| i.title).collect();
    assert_eq!(
        titles,
        vec![
            "Economic Pessimism & Cost-of-Living",
            "Healthcare Affordability Crisis",
            "International Trade & Tariffs",
            "AI Regulation & Technology Policy",
        ]
    );
}

#[test]
fn every_issue_cites_sources() {
    for issue in KEY_ISSUES {
        assert!(!issue.summary.is_empty(), "{} has no summary", issue.title);
        assert!(!issue.sources.is_empty(), "{} has no sources", issue.title);
    }
}

#[test]
fn summaries_have_single_spaces_after_line_continuation() {
    for issue in KEY_ISSUES {
        assert!(!issue.summary.contains("  "), "{} has doubled spaces", issue.title);
    }
}

#[test]
fn tones_are_unique() {
    for (i, a) in KEY_ISSUES.iter().enumerate() {
        for b in &KEY_ISSUES[i + 1..] {
            assert_ne!(a.tone, b.tone);
        }
    }
}
