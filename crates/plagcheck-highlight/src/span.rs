use plagcheck_core::types::FragmentMatch;

/// A resolved highlight: byte range into the submitted text plus the index
/// of the fragment match that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub fragment: usize,
}

impl HighlightSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn overlaps(&self, other: &HighlightSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Compute the final, non-overlapping highlight spans for `full_text`.
///
/// Every literal occurrence of every fragment's `user_sentence` is a
/// candidate. Candidates are ranked longest-first (ties broken by higher
/// similarity) and accepted greedily, so a shorter occurrence that collides
/// with an already accepted longer one is dropped rather than nested; its
/// other occurrences elsewhere in the text are still marked. Fragments whose
/// sentence never occurs in the text contribute nothing. The returned spans
/// are sorted by start offset.
pub fn resolve_spans(full_text: &str, matches: &[FragmentMatch]) -> Vec<HighlightSpan> {
    let mut candidates: Vec<HighlightSpan> = Vec::new();
    for (fragment, m) in matches.iter().enumerate() {
        if m.user_sentence.is_empty() {
            continue;
        }
        for (start, occurrence) in full_text.match_indices(&m.user_sentence) {
            candidates.push(HighlightSpan {
                start,
                end: start + occurrence.len(),
                fragment,
            });
        }
    }
    candidates.sort_by(|a, b| {
        b.len().cmp(&a.len()).then_with(|| {
            let sim_a = matches[a.fragment].similarity;
            let sim_b = matches[b.fragment].similarity;
            sim_b.partial_cmp(&sim_a).unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    let mut accepted: Vec<HighlightSpan> = Vec::new();
    for candidate in candidates {
        if accepted.iter().all(|s| !s.overlaps(&candidate)) {
            accepted.push(candidate);
        }
    }
    accepted.sort_by_key(|s| s.start);
    accepted
}
