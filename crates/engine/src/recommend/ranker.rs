//! Ordering and truncation of scored candidates.

use crate::types::ScoredCandidate;

/// Sorts by descending score and keeps the first `top_n`.
///
/// The sort is stable, so equal scores keep their input order.
/// `top_n <= 0` yields an empty list.
pub fn rank_candidates(mut scored: Vec<ScoredCandidate>, top_n: i64) -> Vec<ScoredCandidate> {
    if top_n <= 0 {
        return Vec::new();
    }

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(usize::try_from(top_n).unwrap_or(usize::MAX));
    scored
}
