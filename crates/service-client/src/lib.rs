//! Clipmatch Service Client
//!
//! Talks to the remote processing service that turns a video URL into a
//! diarization document and a set of extracted clips:
//! - **Submit:** POST the video URL and wait for the job to finish
//! - **Diarization:** Fetch the utterance list the job produced
//!
//! Every response body is decoded through `clipmatch-model`, so callers get
//! strict records or a `MalformedResponse` error, never loose JSON.

pub mod client;
pub mod error;

pub use client::{ProcessedJob, ProcessingClient};
pub use error::{ClientError, ClientResult};
