//! Wire types exchanged with the analysis service.

use serde::{Deserialize, Serialize};

/// Body of a check request: the raw text to analyze.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

/// One flagged pair: a sentence from the submitted text and the external
/// sentence it resembles.
///
/// - `user_sentence`: substring of the submitted text that was flagged
/// - `matched_sentence`: the similar text found in an external source
/// - `similarity`: score in [0,1], computed upstream
/// - `source`: provider label ("Wikipedia", "Gutenberg", "NewsAPI", ...)
/// - `title`/`url`: descriptive fields, present when the provider has them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentMatch {
    pub user_sentence: String,
    pub matched_sentence: String,
    pub similarity: f64,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FragmentMatch {
    /// Similarity as a rounded whole percentage.
    pub fn similarity_pct(&self) -> i32 {
        (self.similarity * 100.0).round() as i32
    }
}

/// Complete response for one submission.
///
/// `fragment_matches` arrives in service order and is not guaranteed sorted.
/// Each `user_sentence` is expected to occur verbatim inside `full_text`;
/// when it does not, highlighting marks nothing for it. Results are
/// transient: held only for the current cycle, replaced by the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub full_text: String,
    #[serde(default)]
    pub fragment_matches: Vec<FragmentMatch>,
}
