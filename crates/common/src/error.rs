//! Error types shared across clipmatch crates.

/// Top-level error type for clipmatch operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipmatchError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Operation cancelled at stage={stage}")]
    Cancelled { stage: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ClipmatchError.
pub type ClipmatchResult<T> = Result<T, ClipmatchError>;

impl ClipmatchError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn cancelled(stage: &'static str) -> Self {
        Self::Cancelled { stage }
    }

    /// Whether this error came from a cooperative cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}
