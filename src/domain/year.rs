//! Publication-year matching over unstructured text.
//!
//! This module encapsulates the regex heuristics used to spot a plausible
//! publication year in extracted page text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lower bound of the accepted publication-year range, inclusive.
pub const YEAR_MIN: i32 = 1900;

/// Upper bound of the accepted publication-year range, inclusive.
pub const YEAR_MAX: i32 = 2030;

const MONTH_NAMES: &str = "January|February|March|April|May|June|July|August|\
September|October|November|December|Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec";

/// Ordered pattern families for year detection.
///
/// Priority: bare 4-digit token, parenthesized token, token followed by a
/// month name, month name followed by a token. Earlier families win; a
/// later family is only consulted when every earlier one came up empty.
static YEAR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(19[0-9]{2}|20[0-2][0-9])\b".to_string(),
        r"\((\d{4})\)".to_string(),
        format!(r"\b(\d{{4}})\s*[,-]?\s*(?:{MONTH_NAMES})\b"),
        format!(r"\b(?:{MONTH_NAMES})\s*[,-]?\s*(\d{{4}})\b"),
    ]
    .into_iter()
    .map(|p| Regex::new(&format!("(?i){p}")).expect("valid year pattern"))
    .collect()
});

/// Heuristic publication-year matcher.
///
/// This is a lossy procedure: a page number, ISBN fragment, or street
/// address can satisfy a pattern. Callers accept false positives as a known
/// limitation.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearMatcher;

impl YearMatcher {
    /// Creates a new year matcher.
    pub fn new() -> Self {
        Self
    }

    /// Returns true when `year` lies in the accepted publication range.
    pub fn in_range(year: i32) -> bool {
        (YEAR_MIN..=YEAR_MAX).contains(&year)
    }

    /// Finds a plausible publication year in `text`.
    ///
    /// Pattern families are tried strictly in priority order. Within a
    /// family, matches are scanned in order of appearance and the first
    /// value inside [1900, 2030] is returned immediately; families are
    /// never mixed.
    pub fn find_year(&self, text: &str) -> Option<String> {
        for pattern in YEAR_PATTERNS.iter() {
            for caps in pattern.captures_iter(text) {
                let Some(m) = caps.get(1) else { continue };
                let Ok(year) = m.as_str().parse::<i32>() else { continue };
                if Self::in_range(year) {
                    return Some(year.to_string());
                }
            }
        }
        None
    }
}
