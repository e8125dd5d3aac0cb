//! Single-pass renderers over resolved spans.

use console::Style;

use crate::span::HighlightSpan;

/// Alternating pieces of the submitted text, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    /// Marked slice plus the index of the fragment match behind it.
    Marked(&'a str, usize),
}

/// Walk `full_text` once, slicing it along `spans`. Spans must be sorted and
/// non-overlapping, which is what [`crate::span::resolve_spans`] returns.
pub fn segments<'a>(full_text: &'a str, spans: &[HighlightSpan]) -> Vec<Segment<'a>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            out.push(Segment::Plain(&full_text[cursor..span.start]));
        }
        out.push(Segment::Marked(&full_text[span.start..span.end], span.fragment));
        cursor = span.end;
    }
    if cursor < full_text.len() {
        out.push(Segment::Plain(&full_text[cursor..]));
    }
    out
}

/// Escape text for interpolation into HTML.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the text as an HTML fragment with matches wrapped in `<mark>`.
/// Every slice of user text is escaped; the only markup in the output is the
/// structural tags emitted here.
pub fn render_html(full_text: &str, spans: &[HighlightSpan]) -> String {
    let mut out = String::with_capacity(full_text.len());
    for segment in segments(full_text, spans) {
        match segment {
            Segment::Plain(text) => out.push_str(&html_escape(text)),
            Segment::Marked(text, _) => {
                out.push_str("<mark>");
                out.push_str(&html_escape(text));
                out.push_str("</mark>");
            }
        }
    }
    out
}

/// Render the text for the terminal, flagged fragments styled red on yellow.
pub fn render_terminal(full_text: &str, spans: &[HighlightSpan]) -> String {
    let mark = Style::new().red().on_yellow();
    let mut out = String::with_capacity(full_text.len());
    for segment in segments(full_text, spans) {
        match segment {
            Segment::Plain(text) => out.push_str(text),
            Segment::Marked(text, _) => out.push_str(&mark.apply_to(text).to_string()),
        }
    }
    out
}

/// Standalone HTML page around [`render_html`], for file export.
pub fn render_page(title: &str, full_text: &str, spans: &[HighlightSpan]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; margin: 2rem auto; max-width: 48rem; }}
.checked-text {{ white-space: pre-wrap; background: #f9fafb; padding: 1rem; border-radius: 8px; }}
mark {{ background: #fde68a; color: #b91c1c; padding: 2px 4px; border-radius: 4px; }}
</style>
</head>
<body>
<h1>{title}</h1>
<div class="checked-text">{body}</div>
</body>
</html>
"#,
        title = html_escape(title),
        body = render_html(full_text, spans),
    )
}
