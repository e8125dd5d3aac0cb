//! Display statistics derived from an analysis result.

use crate::types::AnalysisResult;

/// Characters that terminate a sentence for counting purposes.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Raw sentence split of `text`, empty segments included.
///
/// Percentage math runs against the unfiltered split length, so trailing
/// terminators contribute an empty segment on purpose.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(&SENTENCE_TERMINATORS[..]).collect()
}

/// Number of split segments that carry actual text.
pub fn sentence_count(text: &str) -> usize {
    split_sentences(text)
        .iter()
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Headline numbers for one analysis result.
///
/// `plagiarism_pct` is `round(matches / raw_split_len * 100)` with the
/// denominator floored to 1; `unique_pct` is its complement. Neither is
/// clamped to [0,100], and `unique_sentences` goes negative when the service
/// reports more matches than the text has sentences; [`Self::has_excess_matches`]
/// surfaces that inconsistency instead of hiding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub total_sentences: usize,
    pub matched_sentences: usize,
    pub unique_sentences: i64,
    pub plagiarism_pct: i32,
    pub unique_pct: i32,
}

impl ResultSummary {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let raw_splits = split_sentences(&result.full_text).len().max(1);
        let total = sentence_count(&result.full_text);
        let matched = result.fragment_matches.len();
        let plagiarism_pct = ((matched as f64 / raw_splits as f64) * 100.0).round() as i32;
        Self {
            total_sentences: total,
            matched_sentences: matched,
            unique_sentences: total as i64 - matched as i64,
            plagiarism_pct,
            unique_pct: 100 - plagiarism_pct,
        }
    }

    /// True when the upstream match count exceeds the sentence count. The
    /// percentages leave [0,100] in that case; treat it as a data-quality
    /// signal from the service.
    pub fn has_excess_matches(&self) -> bool {
        self.matched_sentences > self.total_sentences
    }
}
