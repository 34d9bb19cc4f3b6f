//! Text and filename normalization.
//!
//! Utterance text and clip filenames are reduced to the same vocabulary:
//! lowercase ASCII words joined by single hyphens ("slugs"), which are then
//! split into tokens. Every function here is pure and total.

/// Ordered word tokens. Each token is non-empty and only contains `[a-z0-9]`.
pub type TokenSequence = Vec<String>;

/// Convert free text into a slug.
///
/// Lowercases, drops everything except ASCII letters, digits, whitespace and
/// hyphens, then joins the remaining words with single hyphens. Whitespace is
/// the ECMAScript `\s` set, so U+FEFF separates words and U+0085 is dropped.
///
/// ```
/// use clipmatch_core::normalize_to_slug;
/// assert_eq!(normalize_to_slug("All right, that's it!"), "all-right-thats-it");
/// ```
pub fn normalize_to_slug(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || is_slug_whitespace(c) || c == '-'
        })
        .collect();
    let hyphenated = kept
        .split(is_slug_whitespace)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    collapse_hyphens(&hyphenated)
}

/// Split a slug into tokens, discarding empty segments.
pub fn tokenize_slug(slug: &str) -> TokenSequence {
    slug.split('-')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Extract the payload slug from a clip file name.
///
/// Clip names follow `<ordinal>_<label>_<payload-slug>.<ext>`; only the part
/// after the last underscore (extension removed) carries utterance text.
///
/// ```
/// use clipmatch_core::extract_payload_slug;
/// assert_eq!(extract_payload_slug("002_name_can-opener.wav"), "can-opener");
/// ```
pub fn extract_payload_slug(file_name: &str) -> String {
    let stem = strip_extension(file_name);
    let tail = stem.rsplit_once('_').map_or(stem, |(_, tail)| tail);
    let cleaned: String = tail
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();
    collapse_hyphens(&cleaned)
}

/// Last `/`-delimited segment of a path.
///
/// Returns the whole path when it has no `/` or ends with one.
pub fn base_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => path,
    }
}

/// Tokens of an utterance's text.
pub fn text_tokens(text: &str) -> TokenSequence {
    tokenize_slug(&normalize_to_slug(text))
}

/// Word separators for slugs: the ECMAScript `\s` class.
///
/// Differs from [`char::is_whitespace`] on U+0085 (not a separator here) and
/// U+FEFF (a separator here).
fn is_slug_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Remove a trailing `.<ascii alphanumerics>` extension, if present.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => {
            let ext = &name[dot + 1..];
            if !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphanumeric()) {
                &name[..dot]
            } else {
                name
            }
        }
        None => name,
    }
}

fn collapse_hyphens(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_hyphen = false;
    for c in s.chars() {
        if c == '-' {
            if !prev_hyphen {
                out.push(c);
            }
            prev_hyphen = true;
        } else {
            out.push(c);
            prev_hyphen = false;
        }
    }
    out
}
