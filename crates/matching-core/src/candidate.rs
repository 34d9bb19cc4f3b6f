//! Clip candidates with precomputed tokens.

use serde::Serialize;

use crate::text::{base_name, extract_payload_slug, tokenize_slug, TokenSequence};
use crate::url::PlaybackUrlResolver;

/// An extracted clip ready for matching.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Path as reported by the processing service.
    pub file_path: String,

    /// Display name (last path segment).
    pub file_name: String,

    /// Resolved playback URL.
    pub url: String,

    /// Payload slug extracted from the file name.
    pub slug: String,

    /// Tokens of `slug`.
    pub tokens: TokenSequence,
}

impl Candidate {
    /// Derive name, URL and tokens for one clip path.
    pub fn from_path(path: &str, resolver: &impl PlaybackUrlResolver) -> Self {
        let file_name = base_name(path).to_string();
        let slug = extract_payload_slug(&file_name);
        let tokens = tokenize_slug(&slug);
        Self {
            file_path: path.to_string(),
            url: resolver.resolve(path),
            file_name,
            slug,
            tokens,
        }
    }

    /// Prepare every clip once, preserving order.
    pub fn prepare_all<S: AsRef<str>>(
        paths: &[S],
        resolver: &impl PlaybackUrlResolver,
    ) -> Vec<Self> {
        paths
            .iter()
            .map(|p| Self::from_path(p.as_ref(), resolver))
            .collect()
    }
}

impl AsRef<[String]> for Candidate {
    fn as_ref(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::{PassThroughResolver, PublicUrlMapper};

    #[test]
    fn test_from_service_path() {
        let c = Candidate::from_path(
            "/app/output_clips/req-1/002_name_can-opener.wav",
            &PublicUrlMapper::default(),
        );
        assert_eq!(c.file_name, "002_name_can-opener.wav");
        assert_eq!(c.url, "https://files.maila.ai/req-1/002_name_can-opener.wav");
        assert_eq!(c.slug, "can-opener");
        assert_eq!(c.tokens, vec!["can", "opener"]);
    }

    #[test]
    fn test_prepare_all_preserves_order() {
        let paths = ["b/x_two.wav", "a/x_one.wav"];
        let prepared = Candidate::prepare_all(&paths, &PassThroughResolver);
        assert_eq!(prepared.len(), 2);
        assert_eq!(prepared[0].tokens, vec!["two"]);
        assert_eq!(prepared[1].url, "a/x_one.wav");
    }
}
