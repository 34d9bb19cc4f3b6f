//! Playback URL resolution for clip paths.

/// Turns an internal clip path into something a player can fetch.
pub trait PlaybackUrlResolver {
    fn resolve(&self, path: &str) -> String;
}

/// Maps paths under the service's output prefix onto its public host.
///
/// `/app/output_clips/a/b.wav` becomes `https://files.maila.ai/a/b.wav` with
/// the default settings. Paths outside the prefix are returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUrlMapper {
    internal_prefix: String,
    public_host: String,
}

impl PublicUrlMapper {
    pub fn new(internal_prefix: impl Into<String>, public_host: impl Into<String>) -> Self {
        let mut internal_prefix = internal_prefix.into();
        if !internal_prefix.ends_with('/') {
            internal_prefix.push('/');
        }
        let public_host = public_host.into().trim_end_matches('/').to_string();
        Self {
            internal_prefix,
            public_host,
        }
    }

    /// Public URL for `path`, or `path` itself when it is not under the prefix.
    pub fn to_public(&self, path: &str) -> String {
        match path.strip_prefix(&self.internal_prefix) {
            Some(rest) => format!("{}/{}", self.public_host, rest),
            None => path.to_string(),
        }
    }
}

impl Default for PublicUrlMapper {
    fn default() -> Self {
        Self::new("/app/output_clips/", "https://files.maila.ai")
    }
}

impl PlaybackUrlResolver for PublicUrlMapper {
    fn resolve(&self, path: &str) -> String {
        self.to_public(path)
    }
}

/// Uses clip paths as-is. Suitable for local files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughResolver;

impl PlaybackUrlResolver for PassThroughResolver {
    fn resolve(&self, path: &str) -> String {
        path.to_string()
    }
}
