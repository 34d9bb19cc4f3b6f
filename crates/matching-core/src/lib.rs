//! Clipmatch Core: utterance to clip matching
//!
//! Decides which extracted audio clip belongs to which diarized utterance:
//! - **Text normalization:** Utterance text and clip filenames to word tokens
//! - **Edit distance:** Token-level Levenshtein distance
//! - **Match selection:** Nearest candidate with a length-normalized score
//! - **Alignment:** One thresholded lookup per utterance, in input order
//!
//! This crate is pure computation: no I/O, no network.
//! All inputs are data; all outputs are data.

pub mod candidate;
pub mod distance;
pub mod pipeline;
pub mod selector;
pub mod text;
pub mod url;

pub use candidate::Candidate;
pub use distance::levenshtein_distance;
pub use pipeline::{AlignmentConfig, AlignmentOutput, AlignmentSummary, ClipAligner};
pub use selector::{best_match, MatchResult};
pub use text::{base_name, extract_payload_slug, normalize_to_slug, tokenize_slug, TokenSequence};
pub use url::{PassThroughResolver, PlaybackUrlResolver, PublicUrlMapper};
