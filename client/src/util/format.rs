//! Display formatting for backend values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a `[0, 1]` confidence as a whole percentage, e.g. `0.72 -> "72%"`.
///
/// Out-of-range and non-finite inputs are clamped so the UI never shows
/// `NaN%` or `140%`.
pub fn confidence_percent(confidence: f64) -> String {
    let clamped = if confidence.is_finite() { confidence.clamp(0.0, 1.0) } else { 0.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (clamped * 100.0).round() as u32;
    format!("{percent}%")
}

/// Join source citations for the compact chat footer.
pub fn join_sources(sources: &[String]) -> String {
    sources.join(" • ")
}

/// Shorten an RFC 3339 timestamp to `YYYY-MM-DD HH:MM UTC`.
///
/// Inputs that do not look like RFC 3339 are returned unchanged.
pub fn display_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_owned();
    };
    let well_formed_date = date.len() == 10 && date.as_bytes()[4] == b'-' && date.as_bytes()[7] == b'-';
    let hhmm = time.get(..5).filter(|t| t.as_bytes().get(2) == Some(&b':'));
    match (well_formed_date, hhmm) {
        (true, Some(hhmm)) => format!("{date} {hhmm} UTC"),
        _ => raw.to_owned(),
    }
}
