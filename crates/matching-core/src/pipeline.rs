//! Utterance to clip alignment.
//!
//! Candidate tokens are computed once; each utterance then gets an
//! independent nearest-match lookup. This is not an assignment problem:
//! several utterances may accept the same clip and some clips may go unused.

use std::collections::BTreeSet;

use clipmatch_common::cancel::CancellationToken;
use clipmatch_common::config::MatchingDefaults;
use clipmatch_common::error::{ClipmatchError, ClipmatchResult};
use clipmatch_model::{AlignmentRow, ClipMatch, Utterance};
use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::selector::{best_match, MatchResult};
use crate::text::text_tokens;
use crate::url::PlaybackUrlResolver;

/// Acceptance policy for matches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentConfig {
    /// Maximum normalized score (inclusive) at which a match is accepted.
    pub threshold: f64,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

impl From<&MatchingDefaults> for AlignmentConfig {
    fn from(defaults: &MatchingDefaults) -> Self {
        Self {
            threshold: defaults.threshold,
        }
    }
}

impl AlignmentConfig {
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Scores live in `[0, 1]`, so thresholds outside that range are mistakes.
    pub fn validate(&self) -> ClipmatchResult<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(ClipmatchError::config(format!(
                "match threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    pub fn accepts(&self, result: &MatchResult) -> bool {
        result.normalized_score <= self.threshold
    }
}

/// Counts describing one alignment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AlignmentSummary {
    pub utterances: usize,
    pub candidates: usize,
    /// Rows with an accepted clip.
    pub matched: usize,
    /// Distinct clips accepted by at least one row.
    pub distinct_clips: usize,
}

/// Rows in input order plus run counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentOutput {
    pub rows: Vec<AlignmentRow>,
    pub summary: AlignmentSummary,
}

/// Aligns diarized utterances with extracted clips.
#[derive(Debug, Clone)]
pub struct ClipAligner {
    config: AlignmentConfig,
}

impl ClipAligner {
    /// Create an aligner, rejecting an unusable threshold.
    pub fn new(config: AlignmentConfig) -> ClipmatchResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Aligner with the default threshold of 0.5.
    pub fn with_defaults() -> Self {
        Self {
            config: AlignmentConfig::default(),
        }
    }

    pub fn config(&self) -> &AlignmentConfig {
        &self.config
    }

    /// Prepare clip paths and align every utterance against them.
    pub fn align<S, R>(
        &self,
        utterances: &[Utterance],
        clip_paths: &[S],
        resolver: &R,
    ) -> AlignmentOutput
    where
        S: AsRef<str>,
        R: PlaybackUrlResolver,
    {
        let candidates = Candidate::prepare_all(clip_paths, resolver);
        self.align_candidates(utterances, &candidates)
    }

    /// Align every utterance against prepared candidates.
    pub fn align_candidates(
        &self,
        utterances: &[Utterance],
        candidates: &[Candidate],
    ) -> AlignmentOutput {
        let mut run = AlignmentRun::start(utterances.len(), candidates.len());
        for (index, utterance) in utterances.iter().enumerate() {
            run.push(self.align_one(index, utterance, candidates));
        }
        run.finish()
    }

    /// Like [`align_candidates`](Self::align_candidates), checking `cancel`
    /// before each utterance.
    pub fn align_cancellable(
        &self,
        utterances: &[Utterance],
        candidates: &[Candidate],
        cancel: &CancellationToken,
    ) -> ClipmatchResult<AlignmentOutput> {
        let mut run = AlignmentRun::start(utterances.len(), candidates.len());
        for (index, utterance) in utterances.iter().enumerate() {
            cancel.check("align")?;
            run.push(self.align_one(index, utterance, candidates));
        }
        Ok(run.finish())
    }

    fn align_one(
        &self,
        index: usize,
        utterance: &Utterance,
        candidates: &[Candidate],
    ) -> (AlignmentRow, Option<usize>) {
        let row = AlignmentRow::unmatched(index, utterance);
        let target = text_tokens(&utterance.utterance);

        let Some(result) = best_match(&target, candidates) else {
            tracing::debug!(index, "No candidates to match");
            return (row, None);
        };

        let accepted = self.config.accepts(&result);
        let candidate = &candidates[result.candidate_index];
        tracing::debug!(
            index,
            candidate = %candidate.file_name,
            distance = result.raw_distance,
            score = result.normalized_score,
            accepted,
            "Best match"
        );

        if !accepted {
            return (row, None);
        }

        let clip = ClipMatch {
            file_name: candidate.file_name.clone(),
            url: candidate.url.clone(),
            score: result.normalized_score,
        };
        (row.with_clip(clip), Some(result.candidate_index))
    }
}

/// Accumulates rows and counts for one pass.
struct AlignmentRun {
    rows: Vec<AlignmentRow>,
    used: BTreeSet<usize>,
    candidates: usize,
}

impl AlignmentRun {
    fn start(utterances: usize, candidates: usize) -> Self {
        tracing::info!(utterances, candidates, "Aligning utterances with clips");
        Self {
            rows: Vec::with_capacity(utterances),
            used: BTreeSet::new(),
            candidates,
        }
    }

    fn push(&mut self, (row, candidate_index): (AlignmentRow, Option<usize>)) {
        if let Some(i) = candidate_index {
            self.used.insert(i);
        }
        self.rows.push(row);
    }

    fn finish(self) -> AlignmentOutput {
        let summary = AlignmentSummary {
            utterances: self.rows.len(),
            candidates: self.candidates,
            matched: self.rows.iter().filter(|r| r.is_matched()).count(),
            distinct_clips: self.used.len(),
        };
        tracing::info!(
            matched = summary.matched,
            total = summary.utterances,
            distinct_clips = summary.distinct_clips,
            "Alignment complete"
        );
        AlignmentOutput {
            rows: self.rows,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::{PassThroughResolver, PublicUrlMapper};

    fn utter(text: &str) -> Utterance {
        Utterance::new("SPEAKER_00", text, 0.0, 1.0)
    }

    #[test]
    fn test_short_utterance_matches_longer_clip_at_default_threshold() {
        let utterances = vec![utter("All right")];
        let clips = ["can-opener.wav", "x_all-right-thats-it.wav"];

        let output = ClipAligner::with_defaults().align(&utterances, &clips, &PassThroughResolver);

        assert_eq!(output.rows.len(), 1);
        let clip = output.rows[0].clip.as_ref().expect("match should be accepted");
        assert_eq!(clip.file_name, "x_all-right-thats-it.wav");
        assert!((clip.score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_stricter_threshold_rejects_match() {
        let aligner = ClipAligner::new(AlignmentConfig::with_threshold(0.49)).unwrap();
        let output = aligner.align(
            &[utter("All right")],
            &["can-opener.wav", "x_all-right-thats-it.wav"],
            &PassThroughResolver,
        );
        assert!(output.rows[0].clip.is_none());
        assert_eq!(output.summary.matched, 0);
    }

    #[test]
    fn test_empty_inputs() {
        let aligner = ClipAligner::with_defaults();
        let none: [&str; 0] = [];

        let output = aligner.align(&[], &["001_a_hello.wav"], &PassThroughResolver);
        assert!(output.rows.is_empty());

        let output = aligner.align(&[utter("hello"), utter("bye")], &none, &PassThroughResolver);
        assert_eq!(output.rows.len(), 2);
        assert!(output.rows.iter().all(|r| r.clip.is_none()));
        assert_eq!(output.summary.candidates, 0);
    }

    #[test]
    fn test_rows_preserve_order_and_fields() {
        let utterances = vec![
            Utterance::new("A", "Hello there", 0.0, 1.2),
            Utterance::new("B", "Something unrelated entirely", 1.3, 3.0),
            Utterance::new("A", "General Kenobi!", 3.1, 4.0),
        ];
        let clips = [
            "/app/output_clips/r/001_spk0_hello-there.wav",
            "/app/output_clips/r/002_spk1_general-kenobi.wav",
        ];

        let output =
            ClipAligner::with_defaults().align(&utterances, &clips, &PublicUrlMapper::default());

        let indices: Vec<usize> = output.rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(output.rows[1].speaker, "B");
        assert!((output.rows[1].start - 1.3).abs() < 1e-9);

        assert_eq!(
            output.rows[0].clip.as_ref().unwrap().url,
            "https://files.maila.ai/r/001_spk0_hello-there.wav"
        );
        assert!(output.rows[1].clip.is_none());
        assert_eq!(
            output.rows[2].clip.as_ref().unwrap().file_name,
            "002_spk1_general-kenobi.wav"
        );
        assert_eq!(output.summary.matched, 2);
        assert_eq!(output.summary.distinct_clips, 2);
    }

    #[test]
    fn test_same_clip_may_match_many_utterances() {
        let utterances = vec![utter("Thank you."), utter("thank you"), utter("THANK YOU!")];
        let output = ClipAligner::with_defaults().align(
            &utterances,
            &["003_x_thank-you.wav", "004_x_goodbye.wav"],
            &PassThroughResolver,
        );

        assert!(output
            .rows
            .iter()
            .all(|r| r.clip.as_ref().map(|c| c.file_name.as_str()) == Some("003_x_thank-you.wav")));
        assert_eq!(output.summary.matched, 3);
        assert_eq!(output.summary.distinct_clips, 1);
    }

    #[test]
    fn test_punctuation_only_utterance_is_not_an_error() {
        let output = ClipAligner::with_defaults().align(
            &[utter("...")],
            &["001_x_hello.wav"],
            &PassThroughResolver,
        );
        // empty target vs one token: distance 1, score 1.0
        assert!(output.rows[0].clip.is_none());
    }

    #[test]
    fn test_invalid_thresholds_are_rejected() {
        for bad in [f64::NAN, -0.1, 1.5, f64::INFINITY] {
            assert!(ClipAligner::new(AlignmentConfig::with_threshold(bad)).is_err());
        }
        assert!(ClipAligner::new(AlignmentConfig::with_threshold(0.0)).is_ok());
        assert!(ClipAligner::new(AlignmentConfig::with_threshold(1.0)).is_ok());
    }

    #[test]
    fn test_config_from_matching_defaults() {
        let defaults = MatchingDefaults { threshold: 0.3 };
        let config = AlignmentConfig::from(&defaults);
        assert!((config.threshold - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_cancellation_stops_between_utterances() {
        let candidates = Candidate::prepare_all(&["001_x_hello.wav"], &PassThroughResolver);
        let token = CancellationToken::new();
        let aligner = ClipAligner::with_defaults();

        let output = aligner
            .align_cancellable(&[utter("hello")], &candidates, &token)
            .unwrap();
        assert_eq!(output.summary.matched, 1);

        token.cancel();
        let err = aligner
            .align_cancellable(&[utter("hello")], &candidates, &token)
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_cancellable_and_plain_runs_agree() {
        let utterances = vec![utter("hello"), utter("good bye"), utter("nothing here")];
        let candidates =
            Candidate::prepare_all(&["1_a_hello.wav", "2_b_goodbye.wav"], &PassThroughResolver);
        let aligner = ClipAligner::with_defaults();

        let plain = aligner.align_candidates(&utterances, &candidates);
        let cancellable = aligner
            .align_cancellable(&utterances, &candidates, &CancellationToken::new())
            .unwrap();
        assert_eq!(plain, cancellable);
    }
}
