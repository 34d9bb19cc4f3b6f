//! Alignment output rows.

use serde::{Deserialize, Serialize};

use crate::utterance::Utterance;

/// An accepted clip for an utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipMatch {
    /// Display file name of the clip.
    pub file_name: String,

    /// Playback URL of the clip.
    pub url: String,

    /// Normalized token edit distance in `[0.0, 1.0]` (lower is closer).
    pub score: f64,
}

/// One output row per input utterance, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentRow {
    /// Zero-based position of the utterance in the input.
    pub index: usize,
    pub speaker: String,
    pub utterance: String,
    pub start: f64,
    pub end: f64,
    pub duration: f64,

    /// Accepted clip, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<ClipMatch>,
}

impl AlignmentRow {
    /// Build a row carrying the utterance fields and no clip.
    pub fn unmatched(index: usize, utterance: &Utterance) -> Self {
        Self {
            index,
            speaker: utterance.speaker_name.clone(),
            utterance: utterance.utterance.clone(),
            start: utterance.start,
            end: utterance.end,
            duration: utterance.duration,
            clip: None,
        }
    }

    /// Attach an accepted clip.
    pub fn with_clip(mut self, clip: ClipMatch) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn is_matched(&self) -> bool {
        self.clip.is_some()
    }
}
