//! Applies [`score`] across every candidate and keeps the matches.

use itertools::Itertools;

use crate::scoring::score;

/// A candidate paired with the score it got for one query.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScoredCandidate<'a> {
    pub text: &'a str,
    pub score: usize,
}

/// Scores every candidate against a non-empty `query`, dropping non-matches.
///
/// Results come back in input order; use [`filter`] for the ranked list.
pub fn score_all<'a, S: AsRef<str>>(candidates: &'a [S], query: &str) -> Vec<ScoredCandidate<'a>> {
    candidates
        .iter()
        .map(|candidate| {
            let text = candidate.as_ref();
            ScoredCandidate {
                text,
                score: score(text, query),
            }
        })
        .filter(|scored| scored.score > 0)
        .collect()
}

/// Filters `candidates` by `query` and ranks the matches best first.
///
/// An empty query passes every candidate through in its original order.
/// Otherwise matches are sorted by score, descending, with ties kept in input
/// order so the same query always produces the same list.
///
/// # Examples
///
/// ```
/// use shell_pick_core::filter::filter;
///
/// let candidates = ["alpha", "beta", "alphabet"];
/// assert_eq!(filter(&candidates, "al"), vec!["alpha", "alphabet"]);
/// assert_eq!(filter(&candidates, ""), vec!["alpha", "beta", "alphabet"]);
/// ```
pub fn filter<'a, S: AsRef<str>>(candidates: &'a [S], query: &str) -> Vec<&'a str> {
    if query.is_empty() {
        return candidates.iter().map(|candidate| candidate.as_ref()).collect();
    }

    score_all(candidates, query)
        .into_iter()
        // `sorted_by` is a stable sort.
        .sorted_by(|a, b| b.score.cmp(&a.score))
        .map(|scored| scored.text)
        .collect()
}
