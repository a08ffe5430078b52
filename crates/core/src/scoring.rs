//! Fuzzy scoring of a single candidate against a query.
//!
//! Matching is a case-insensitive, forward-only subsequence scan: every
//! character of the query must appear in the candidate in order, though not
//! necessarily next to each other. A score of `0` means the candidate does not
//! match and should be dropped.

/// Points awarded per query character when the query appears contiguously.
const SUBSTRING_BONUS: usize = 2;
/// Points awarded per query character when the candidate starts with the query.
const PREFIX_BONUS: usize = 3;

/// Scores `text` against `query`.
///
/// * An empty query matches everything with a score of `1`.
/// * Each matched query character is worth one point.
/// * `2 * len(query)` is added when the query is a substring of `text`, and a
///   further `3 * len(query)` when `text` starts with the query.
///
/// # Examples
///
/// ```
/// use shell_pick_core::scoring::score;
///
/// assert_eq!(score("alphabet", "al"), 12);
/// assert_eq!(score("beta", "al"), 0);
/// assert_eq!(score("anything", ""), 1);
/// ```
#[must_use]
pub fn score(text: &str, query: &str) -> usize {
    if query.is_empty() {
        return 1;
    }

    if text.is_empty() {
        return 0;
    }

    let folded_text = text.to_lowercase();
    let folded_query = query.to_lowercase();

    let mut remaining = folded_text.chars();
    let mut matched = 0usize;

    for query_char in folded_query.chars() {
        // `any` consumes the iterator up to and including the match, so the
        // cursor only ever moves forward.
        if remaining.by_ref().any(|c| c == query_char) {
            matched += 1;
        } else {
            return 0;
        }
    }

    let query_len = folded_query.chars().count();
    let mut total = matched;

    if folded_text.contains(&folded_query) {
        total += SUBSTRING_BONUS * query_len;
    }

    if folded_text.starts_with(&folded_query) {
        total += PREFIX_BONUS * query_len;
    }

    total
}
