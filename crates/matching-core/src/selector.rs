//! Nearest-candidate selection.

use serde::Serialize;

use crate::distance::levenshtein_distance;

/// Best candidate for a target token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult {
    /// Position of the winning candidate in the list passed to [`best_match`].
    pub candidate_index: usize,

    /// Token edit distance to the winner.
    pub raw_distance: usize,

    /// `raw_distance / max(len(target), len(candidate), 1)`, in `[0.0, 1.0]`.
    pub normalized_score: f64,
}

/// Length-normalized distance between two token sequences.
pub fn normalized_score(raw_distance: usize, target_len: usize, candidate_len: usize) -> f64 {
    let denom = target_len.max(candidate_len).max(1);
    raw_distance as f64 / denom as f64
}

/// Find the candidate closest to `target`.
///
/// Returns `None` only when `candidates` is empty. A candidate replaces the
/// current best only with a strictly smaller score, so the earliest index
/// wins ties.
pub fn best_match<T, C>(target: &[T], candidates: &[C]) -> Option<MatchResult>
where
    T: PartialEq,
    C: AsRef<[T]>,
{
    let mut best: Option<MatchResult> = None;

    for (candidate_index, candidate) in candidates.iter().enumerate() {
        let candidate = candidate.as_ref();
        let raw_distance = levenshtein_distance(target, candidate);
        let score = normalized_score(raw_distance, target.len(), candidate.len());

        let should_replace = match &best {
            None => true,
            Some(current) => score < current.normalized_score,
        };
        if should_replace {
            best = Some(MatchResult {
                candidate_index,
                raw_distance,
                normalized_score: score,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn toks(s: &str) -> Vec<String> {
        s.split('-').filter(|t| !t.is_empty()).map(str::to_owned).collect()
    }

    #[test]
    fn test_no_candidates() {
        let empty: Vec<Vec<String>> = vec![];
        assert_eq!(best_match(&toks("all-right"), &empty), None);
    }

    #[test]
    fn test_picks_lowest_normalized_score() {
        let candidates = vec![toks("can-opener"), toks("all-right-thats-it")];
        let result = best_match(&toks("all-right"), &candidates).unwrap();
        assert_eq!(result.candidate_index, 1);
        assert_eq!(result.raw_distance, 2);
        assert!((result.normalized_score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_exact_match_scores_zero() {
        let candidates = vec![toks("foo"), toks("hello-there"), toks("hello")];
        let result = best_match(&toks("hello-there"), &candidates).unwrap();
        assert_eq!(result.candidate_index, 1);
        assert_eq!(result.raw_distance, 0);
        assert_eq!(result.normalized_score, 0.0);
    }

    #[test]
    fn test_tie_keeps_earliest_candidate() {
        // both score 1/2
        let candidates = vec![toks("hello-world"), toks("hello-earth")];
        let result = best_match(&toks("hello-mars"), &candidates).unwrap();
        assert_eq!(result.candidate_index, 0);

        let duplicated = vec![toks("x"), toks("a-b"), toks("a-b")];
        assert_eq!(best_match(&toks("a-b"), &duplicated).unwrap().candidate_index, 1);
    }

    #[test]
    fn test_same_raw_distance_prefers_longer_candidate() {
        // distance 1 for both, but the denominator differs
        let candidates = vec![toks("a-b-x"), toks("a-b-c-x")];
        let result = best_match(&toks("a-b-c"), &candidates).unwrap();
        assert_eq!(result.candidate_index, 1);
        assert!((result.normalized_score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_empty_sequences_do_not_divide_by_zero() {
        let empty: Vec<String> = vec![];
        let result = best_match(&empty, &[empty.clone()]).unwrap();
        assert_eq!(result.raw_distance, 0);
        assert_eq!(result.normalized_score, 0.0);

        let result = best_match(&empty, &[toks("a-b")]).unwrap();
        assert_eq!(result.raw_distance, 2);
        assert_eq!(result.normalized_score, 1.0);
    }

    #[test]
    fn test_does_not_require_owned_candidates() {
        let a = toks("one-two");
        let b = toks("three");
        let refs: Vec<&[String]> = vec![a.as_slice(), b.as_slice()];
        assert_eq!(best_match(&toks("three"), &refs).unwrap().candidate_index, 1);
    }

    fn seq() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-c]", 0..6)
    }

    proptest! {
        #[test]
        fn prop_score_is_bounded(target in seq(), candidates in prop::collection::vec(seq(), 1..6)) {
            let result = best_match(&target, &candidates).unwrap();
            prop_assert!(result.normalized_score >= 0.0);
            prop_assert!(result.normalized_score <= 1.0);
            prop_assert!(result.candidate_index < candidates.len());
        }

        #[test]
        fn prop_winner_is_minimal_and_earliest(target in seq(), candidates in prop::collection::vec(seq(), 1..6)) {
            let result = best_match(&target, &candidates).unwrap();
            for (i, candidate) in candidates.iter().enumerate() {
                let d = levenshtein_distance(&target, candidate);
                let score = normalized_score(d, target.len(), candidate.len());
                prop_assert!(score >= result.normalized_score);
                if i < result.candidate_index {
                    prop_assert!(score > result.normalized_score);
                }
            }
        }
    }
}
