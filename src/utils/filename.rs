//! Filename sanitizing for published files.

use regex::Regex;
use std::sync::LazyLock;

/// Characters outside this set are replaced with `_`.
static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]").unwrap());

/// Longest filename GitHub accepts for a single path component.
const MAX_FILENAME_LEN: usize = 255;

/// Errors that can occur while sanitizing a filename.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    #[error("Invalid filename")]
    Empty,

    #[error("Filename is too long (max {MAX_FILENAME_LEN} characters)")]
    TooLong,
}

/// Sanitizes a client-supplied filename so it is safe in a repository path and a URL.
///
/// # Rules
///
/// 1. Directory components are dropped (`a/b\c.mp3` becomes `c.mp3`)
/// 2. Every character outside `[A-Za-z0-9._-]` becomes `_`
/// 3. Leading dots are stripped, so the result is never hidden or `..`
///
/// # Errors
///
/// Returns [`FilenameError::Empty`] if nothing remains and
/// [`FilenameError::TooLong`] past 255 characters.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_filename("my song.mp3").unwrap(), "my_song.mp3");
/// ```
pub fn sanitize_filename(input: &str) -> Result<String, FilenameError> {
    let base = input.rsplit(['/', '\\']).next().unwrap_or(input).trim();
    let replaced = DISALLOWED_CHARS.replace_all(base, "_");
    let sanitized = replaced.trim_start_matches('.');

    if sanitized.is_empty() {
        return Err(FilenameError::Empty);
    }

    if sanitized.len() > MAX_FILENAME_LEN {
        return Err(FilenameError::TooLong);
    }

    Ok(sanitized.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_replaced() {
        assert_eq!(sanitize_filename("my song.mp3").unwrap(), "my_song.mp3");
    }

    #[test]
    fn test_allowed_chars_kept() {
        assert_eq!(
            sanitize_filename("Track-01_final.v2.MP3").unwrap(),
            "Track-01_final.v2.MP3"
        );
    }

    #[test]
    fn test_each_disallowed_char_replaced() {
        assert_eq!(sanitize_filename("a&b(c)#1.mp3").unwrap(), "a_b_c__1.mp3");
        assert_eq!(sanitize_filename("chanson é.mp3").unwrap(), "chanson__.mp3");
    }

    #[test]
    fn test_directories_dropped() {
        assert_eq!(sanitize_filename("../../etc/passwd").unwrap(), "passwd");
        assert_eq!(sanitize_filename("C:\\music\\a b.wav").unwrap(), "a_b.wav");
    }

    #[test]
    fn test_leading_dots_stripped() {
        assert_eq!(sanitize_filename(".hidden.mp3").unwrap(), "hidden.mp3");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(sanitize_filename("  a.mp3 ").unwrap(), "a.mp3");
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(sanitize_filename(""), Err(FilenameError::Empty));
        assert_eq!(sanitize_filename(".."), Err(FilenameError::Empty));
        assert_eq!(sanitize_filename("dir/"), Err(FilenameError::Empty));
    }

    #[test]
    fn test_too_long_rejected() {
        let name = format!("{}.mp3", "a".repeat(300));
        assert_eq!(sanitize_filename(&name), Err(FilenameError::TooLong));
    }
}
