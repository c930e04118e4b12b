//! Filename sanitization.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters a filename must not contain on common filesystems.
pub const ILLEGAL_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maximum sanitized title length before truncation.
pub const MAX_TITLE_LEN: usize = 120;

/// Marker appended to a truncated title.
pub const ELLIPSIS: &str = "...";

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Strips filesystem-illegal characters from a title, collapses whitespace
/// runs to single spaces, and trims.
///
/// Returns `None` when nothing printable survives. Titles longer than
/// [`MAX_TITLE_LEN`] characters are truncated and marked with [`ELLIPSIS`],
/// so the output never exceeds 123 characters.
pub fn sanitize(title: &str) -> Option<String> {
    let stripped: String = title.chars().filter(|c| !ILLEGAL_CHARS.contains(c)).collect();
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    let trimmed = collapsed.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        let mut truncated: String = trimmed.chars().take(MAX_TITLE_LEN).collect();
        truncated.push_str(ELLIPSIS);
        return Some(truncated);
    }
    Some(trimmed.to_string())
}
