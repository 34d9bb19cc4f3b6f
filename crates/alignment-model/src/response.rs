//! Processing service response.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ModelError;

/// What the processing service reports for a finished job.
///
/// All paths are internal service paths; map them to public URLs before
/// handing them to a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Per-request working folder on the service.
    #[serde(default)]
    pub request_folder: Option<String>,

    /// Full extracted audio track.
    #[serde(default)]
    pub audio_file: Option<String>,

    /// Location of the diarization JSON document.
    pub diarization_json: String,

    /// Extracted clip files, in service order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub extracted: Vec<String>,
}

impl ProcessResponse {
    /// Request folder, treating an empty string as absent.
    pub fn request_folder(&self) -> Option<&str> {
        self.request_folder.as_deref().filter(|s| !s.is_empty())
    }

    /// Full audio path, treating an empty string as absent.
    pub fn audio_file(&self) -> Option<&str> {
        self.audio_file.as_deref().filter(|s| !s.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode and validate a processing service response body.
pub fn decode_process_response(body: &str) -> Result<ProcessResponse, ModelError> {
    let response: ProcessResponse =
        serde_json::from_str(body).map_err(|source| ModelError::Malformed {
            what: "processing response",
            source,
        })?;

    if response.diarization_json.trim().is_empty() {
        return Err(ModelError::invalid(
            "processing response",
            "diarization_json is empty",
        ));
    }

    tracing::debug!(
        extracted = response.extracted.len(),
        folder = ?response.request_folder(),
        "Decoded processing response"
    );
    Ok(response)
}
