//! Markdown rendering for model-generated text.
//!
//! Chat answers, verdict explanations, post analyses, leader updates, and the
//! calendar all arrive as Markdown. Output is injected with `inner_html`, so
//! the renderer is the only gate between backend text and page markup.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Extensions the backend's answers use: tables for vote tallies, task lists
/// for agenda items, strikethrough for retracted claims.
const EXTENSIONS: Options = Options::ENABLE_TABLES
    .union(Options::ENABLE_STRIKETHROUGH)
    .union(Options::ENABLE_TASKLISTS);

fn is_raw_html(event: &Event<'_>) -> bool {
    matches!(event, Event::Html(_) | Event::InlineHtml(_))
}

/// Render `markdown` to HTML safe for `inner_html`.
///
/// Raw HTML blocks and inline tags are removed entirely rather than escaped;
/// ordinary text is still escaped by the HTML writer.
pub fn render_markdown_html(markdown: &str) -> String {
    if markdown.trim().is_empty() {
        return String::new();
    }
    let events = Parser::new_ext(markdown, EXTENSIONS).filter(|event| !is_raw_html(event));
    let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut out, events);
    out
}
