//! Relevance ranking of aggregated candidates

use crate::SearchCandidate;

/// How closely a title matches the query, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Exact,
    Prefix,
    Substring,
    Other,
}

/// Classify `title` against an already lowercased query
pub fn match_tier(title: &str, lowered_query: &str) -> MatchTier {
    let title = title.to_lowercase();
    if title == lowered_query {
        MatchTier::Exact
    } else if title.starts_with(lowered_query) {
        MatchTier::Prefix
    } else if title.contains(lowered_query) {
        MatchTier::Substring
    } else {
        MatchTier::Other
    }
}

/// Stable tiered sort: exact, then prefix, then substring, then the rest.
///
/// Candidates within a tier keep their incoming order.
pub fn rank(mut candidates: Vec<SearchCandidate>, query: &str) -> Vec<SearchCandidate> {
    let query = query.to_lowercase();
    candidates.sort_by_cached_key(|candidate| match_tier(candidate.title(), &query));
    candidates
}
