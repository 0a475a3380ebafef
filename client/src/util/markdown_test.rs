use super::*;

#[test]
fn renders_headings_and_lists() {
    let html = render_markdown_html("## Elections\n\n- Primary\n- General\n");
    assert!(html.contains("<h2>Elections</h2>"));
    assert!(html.contains("<li>Primary</li>"));
    assert!(html.contains("<li>General</li>"));
}

#[test]
fn drops_raw_html_blocks() {
    let html = render_markdown_html("<script>alert(1)</script>\n\nsafe");
    assert!(!html.contains("<script>"));
    assert!(html.contains("safe"));
}

#[test]
fn drops_inline_html() {
    let html = render_markdown_html("hello <img src=x onerror=alert(1)> world");
    assert!(!html.contains("<img"));
    assert!(html.contains("hello"));
    assert!(html.contains("world"));
}

#[test]
fn escapes_text_content() {
    let html = render_markdown_html("a < b & c");
    assert!(html.contains("a &lt; b &amp; c"));
}

#[test]
fn blank_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
    assert_eq!(render_markdown_html("  \n"), "");
}

#[test]
fn renders_tables_and_strikethrough() {
    let html = render_markdown_html("| Yea | Nay |\n|---|---|\n| 51 | 49 |\n\n~~retracted~~");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>51</td>"));
    assert!(html.contains("<del>retracted</del>"));
}
