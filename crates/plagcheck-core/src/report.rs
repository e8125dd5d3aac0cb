//! Plain-text report of an analysis result, shaped for clipboard export.

use crate::summary::ResultSummary;
use crate::types::AnalysisResult;

/// Serialize `result` into the copyable report: input text, percentage
/// summary, then one block per match with matched/user text, similarity,
/// source, and title/URL when present.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::from("Plagiarism Checker Results\n\n");
    out.push_str(&format!("Input: {}\n", result.full_text));
    if result.fragment_matches.is_empty() {
        out.push_str("No Plagiarism Detected!");
        return out;
    }
    let summary = ResultSummary::from_result(result);
    out.push_str(&format!("Plagiarism Found: {}%\n", summary.plagiarism_pct));
    out.push_str("Sources:\n");
    for frag in &result.fragment_matches {
        out.push_str(&format!(
            "- Matched: {}\n  Your Text: {}\n  Similarity: {}%\n  Source: {}",
            frag.matched_sentence,
            frag.user_sentence,
            frag.similarity_pct(),
            frag.source
        ));
        if let Some(title) = &frag.title {
            out.push_str(&format!(" ({})", title));
        }
        if let Some(url) = &frag.url {
            out.push_str(&format!(" [{}]", url));
        }
        out.push('\n');
    }
    out
}
