use std::path::PathBuf;

/// Errors raised while decoding or validating boundary records.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed {what}: {source}")]
    Malformed {
        what: &'static str,
        source: serde_json::Error,
    },

    #[error("Invalid {what}: {message}")]
    Invalid { what: &'static str, message: String },
}

impl ModelError {
    pub fn invalid(what: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            what,
            message: message.into(),
        }
    }
}
