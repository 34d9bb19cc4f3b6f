//! Diarization utterances.
//!
//! The diarization document is a JSON array of speaker turns. Timings are
//! seconds from the start of the source recording.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A single speaker turn with text and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    /// Speaker label assigned by diarization.
    pub speaker_name: String,

    /// Transcribed text of the turn.
    pub utterance: String,

    /// Start time in seconds.
    pub start: f64,

    /// End time in seconds.
    pub end: f64,

    /// Duration in seconds, as reported by diarization.
    pub duration: f64,
}

impl Utterance {
    pub fn new(
        speaker_name: impl Into<String>,
        utterance: impl Into<String>,
        start: f64,
        end: f64,
    ) -> Self {
        Self {
            speaker_name: speaker_name.into(),
            utterance: utterance.into(),
            start,
            end,
            duration: end - start,
        }
    }

    /// Check that the timings are finite numbers.
    ///
    /// Signs are not checked: diarization output occasionally carries a
    /// slightly negative start, or `end < start` with a negative duration,
    /// and the text is still worth matching.
    fn validate(&self, index: usize) -> Result<(), ModelError> {
        for (field, value) in [
            ("start", self.start),
            ("end", self.end),
            ("duration", self.duration),
        ] {
            if !value.is_finite() {
                return Err(ModelError::invalid(
                    "diarization",
                    format!("utterance {index}: {field} must be a finite number, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

/// Decode a diarization JSON document into validated utterances.
pub fn parse_diarization(json: &str) -> Result<Vec<Utterance>, ModelError> {
    let utterances: Vec<Utterance> =
        serde_json::from_str(json).map_err(|source| ModelError::Malformed {
            what: "diarization",
            source,
        })?;

    for (index, utterance) in utterances.iter().enumerate() {
        utterance.validate(index)?;
    }

    tracing::debug!(count = utterances.len(), "Decoded diarization");
    Ok(utterances)
}

/// Read and decode a diarization file from disk.
pub fn load_diarization(path: impl AsRef<Path>) -> Result<Vec<Utterance>, ModelError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_diarization(&content)
}
