//! Clip path lists.
//!
//! Offline runs read the extracted clip paths from a plain text file, one
//! path per line. Blank lines and `#` comments are skipped.

use std::path::Path;

use crate::error::ModelError;

/// Parse a clip list, preserving order.
pub fn parse_clip_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}

/// Read a clip list from disk.
pub fn load_clip_list(path: impl AsRef<Path>) -> Result<Vec<String>, ModelError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_clip_list(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let content = "# header\n/a/001_x_one.wav\n\n  /a/002_x_two.wav  \n#/a/skipped.wav\n";
        assert_eq!(
            parse_clip_list(content),
            vec!["/a/001_x_one.wav", "/a/002_x_two.wav"]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_clip_list("").is_empty());
        assert!(parse_clip_list("\n# only a comment\n").is_empty());
    }
}
