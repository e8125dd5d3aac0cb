//! plagcheck-highlight
//!
//! Marks flagged fragments inside the submitted text. Spans are resolved
//! against the original, immutable text first (`span`), then rendered in a
//! single pass (`render`) as HTML or styled terminal output.

pub mod render;
pub mod span;

pub use render::{html_escape, render_html, render_page, render_terminal, segments, Segment};
pub use span::{resolve_spans, HighlightSpan};
