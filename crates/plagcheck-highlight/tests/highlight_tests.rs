use plagcheck_core::types::FragmentMatch;
use plagcheck_highlight::{render_html, resolve_spans, segments, HighlightSpan, Segment};

fn frag(user: &str, similarity: f64) -> FragmentMatch {
    FragmentMatch {
        user_sentence: user.to_string(),
        matched_sentence: format!("{} elsewhere", user),
        similarity,
        source: "Wikipedia".to_string(),
        title: None,
        url: None,
    }
}

#[test]
fn single_occurrence_is_wrapped_exactly_once() {
    let text = "The cat sat. The cat ran.";
    let spans = resolve_spans(text, &[frag("The cat sat", 0.9)]);
    assert_eq!(
        spans,
        vec![HighlightSpan { start: 0, end: 11, fragment: 0 }]
    );
    let html = render_html(text, &spans);
    assert_eq!(html, "<mark>The cat sat</mark>. The cat ran.");
}

#[test]
fn every_occurrence_is_marked() {
    let text = "echo chamber. echo chamber.";
    let spans = resolve_spans(text, &[frag("echo chamber", 0.8)]);
    assert_eq!(spans.len(), 2);
    let html = render_html(text, &spans);
    assert_eq!(html, "<mark>echo chamber</mark>. <mark>echo chamber</mark>.");
}

#[test]
fn longer_fragment_wins_over_contained_shorter_one() {
    let text = "The cat sat. The cat ran.";
    let matches = [frag("The cat sat", 0.9), frag("cat", 0.7)];
    let spans = resolve_spans(text, &matches);
    // "cat" inside the accepted longer span is dropped; the second
    // occurrence (inside "The cat ran") is still marked.
    assert_eq!(
        spans,
        vec![
            HighlightSpan { start: 0, end: 11, fragment: 0 },
            HighlightSpan { start: 17, end: 20, fragment: 1 },
        ]
    );
    let html = render_html(text, &spans);
    assert_eq!(
        html,
        "<mark>The cat sat</mark>. The <mark>cat</mark> ran."
    );
}

#[test]
fn equal_length_ties_prefer_higher_similarity() {
    let text = "abcdef";
    // both want three bytes starting at overlapping offsets
    let matches = [frag("bcd", 0.5), frag("cde", 0.95)];
    let spans = resolve_spans(text, &matches);
    assert_eq!(
        spans,
        vec![HighlightSpan { start: 2, end: 5, fragment: 1 }]
    );
}

#[test]
fn absent_sentence_is_silently_unmarked() {
    let text = "Nothing to see here.";
    let spans = resolve_spans(text, &[frag("not in the text", 0.99)]);
    assert!(spans.is_empty());
    assert_eq!(render_html(text, &spans), "Nothing to see here.");
}

#[test]
fn empty_user_sentence_contributes_nothing() {
    let spans = resolve_spans("some text.", &[frag("", 1.0)]);
    assert!(spans.is_empty());
}

#[test]
fn no_matches_render_verbatim() {
    let text = "Original prose only.";
    let spans = resolve_spans(text, &[]);
    assert_eq!(segments(text, &spans), vec![Segment::Plain(text)]);
    assert_eq!(render_html(text, &spans), text);
}

#[test]
fn user_text_is_escaped_outside_and_inside_marks() {
    let text = "a < b & c. a < b & c again.";
    let spans = resolve_spans(text, &[frag("a < b & c again", 0.9)]);
    let html = render_html(text, &spans);
    assert_eq!(
        html,
        "a &lt; b &amp; c. <mark>a &lt; b &amp; c again</mark>."
    );
}

#[test]
fn terminal_rendering_keeps_the_text_intact() {
    console::set_colors_enabled(false);
    let text = "The cat sat. The cat ran.";
    let spans = resolve_spans(text, &[frag("The cat sat", 0.9)]);
    assert_eq!(plagcheck_highlight::render_terminal(text, &spans), text);
}
