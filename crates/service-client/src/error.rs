//! Errors raised while talking to the processing service.

use clipmatch_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    #[error("Service returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] ModelError),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: msg.into(),
        }
    }
}
