//! Clipmatch Model
//!
//! Defines the data contracts exchanged with the outside world:
//! - **Utterances:** Speaker turns produced by diarization
//! - **Clip lists:** Extracted clip paths, one per line
//! - **Service response:** What the processing service returns for a job
//! - **Alignment rows:** One row per utterance, optionally linked to a clip
//!
//! Loose JSON from the network is decoded into these strict records here,
//! so the matching core only ever sees well-formed input.

pub mod clips;
pub mod error;
pub mod response;
pub mod row;
pub mod utterance;

pub use clips::*;
pub use error::*;
pub use response::*;
pub use row::*;
pub use utterance::*;
