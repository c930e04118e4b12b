//! Title-candidate line filters.
//!
//! Two filters over the leading lines of a page: a permissive one that keeps
//! the topmost reasonably-shaped line, and a strict one that applies an
//! exclusion keyword list plus shape checks aimed at front-matter noise
//! (page numbers, running heads, author lists, dot leaders).

use once_cell::sync::Lazy;
use regex::Regex;

/// Selects a title candidate from the leading lines of a page.
pub trait TitleFilter: Send + Sync {
    /// How many leading lines the filter inspects.
    fn scan_limit(&self) -> usize;

    /// Returns the chosen title line, if any.
    fn select(&self, lines: &[String]) -> Option<String>;
}

static BASIC_REJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)abstract|introduction|references|page|\d{1,2}\s*$")
        .expect("valid reject pattern")
});

static NOISE_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\.\-]*$").expect("valid noise pattern"));

/// Permissive title filter: the topmost line of plausible length that is
/// neither front-matter vocabulary nor digit noise.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTitleFilter;

impl BasicTitleFilter {
    /// Creates a new permissive filter.
    pub fn new() -> Self {
        Self
    }

    fn qualifies(&self, line: &str) -> bool {
        let len = line.chars().count();
        len > 10 && len < 200 && !BASIC_REJECT.is_match(line) && !NOISE_ONLY.is_match(line)
    }
}

impl TitleFilter for BasicTitleFilter {
    fn scan_limit(&self) -> usize {
        10
    }

    fn select(&self, lines: &[String]) -> Option<String> {
        lines
            .iter()
            .take(self.scan_limit())
            .find(|line| self.qualifies(line))
            .cloned()
    }
}

/// Substrings that disqualify a line in the strict filter, matched
/// case-insensitively anywhere in the line.
const EXCLUDED_KEYWORDS: [&str; 14] = [
    "abstract",
    "introduction",
    "keywords",
    "reference",
    "journal",
    "vol",
    "volume",
    "pp",
    "page",
    "doi",
    "proceedings",
    "conference",
    "university",
    "department",
];

static PURELY_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,4}\s*$").expect("valid numeric pattern"));

static ROMAN_NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[ivxlc]+$").expect("valid roman pattern"));

static SINGLE_LOWERCASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]\s*$").expect("valid letter pattern"));

static DOT_LEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3,}").expect("valid dots pattern"));

static HAS_UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid upper pattern"));

/// Strict title filter with an exclusion keyword list and shape checks.
///
/// A line that survives rejection is accepted only when it looks like prose
/// with at least one capital, does not read like a sentence ending or a
/// rights notice, and does not have the comma shape of a short author list.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictTitleFilter;

impl StrictTitleFilter {
    /// Creates a new strict filter.
    pub fn new() -> Self {
        Self
    }

    fn rejects(&self, line: &str) -> bool {
        let len = line.chars().count();
        if len < 10 || len > 250 {
            return true;
        }
        let lower = line.to_lowercase();
        if EXCLUDED_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return true;
        }
        PURELY_NUMERIC.is_match(line)
            || ROMAN_NUMERAL.is_match(line)
            || SINGLE_LOWERCASE.is_match(line)
            || DOT_LEADER.is_match(line)
            || line.matches('.').count() > 5
    }

    fn accepts(&self, line: &str) -> bool {
        if !HAS_UPPERCASE.is_match(line)
            || line.matches('.').count() > 3
            || line.ends_with('.')
            || line.starts_with("Received")
            || line.starts_with("Copyright")
        {
            return false;
        }
        // Short comma-separated lines are usually author lists.
        !(line.contains(',') && line.split(',').count() <= 3)
    }
}

impl TitleFilter for StrictTitleFilter {
    fn scan_limit(&self) -> usize {
        15
    }

    fn select(&self, lines: &[String]) -> Option<String> {
        lines
            .iter()
            .take(self.scan_limit())
            .find(|line| !self.rejects(line) && self.accepts(line))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_basic_topmost_wins() {
        let filter = BasicTitleFilter::new();
        let input = lines(&[
            "Page 3 of 10",
            "A Modern Treatise on Filtering",
            "Another Plausible Candidate Line",
        ]);
        assert_eq!(
            filter.select(&input),
            Some("A Modern Treatise on Filtering".to_string())
        );
    }

    #[test]
    fn test_basic_rejects_trailing_digits() {
        let filter = BasicTitleFilter::new();
        let input = lines(&["Advanced Topics in Chapter 12"]);
        assert_eq!(filter.select(&input), None);
    }

    #[test]
    fn test_basic_rejects_digit_noise() {
        let filter = BasicTitleFilter::new();
        let input = lines(&["2021 - 10.5 - 3.1415926535"]);
        assert_eq!(filter.select(&input), None);
    }

    #[test]
    fn test_strict_rejects_keywords() {
        let filter = StrictTitleFilter::new();
        let input = lines(&[
            "Journal of Important Results",
            "A Framework for Testing Strictness",
        ]);
        assert_eq!(
            filter.select(&input),
            Some("A Framework for Testing Strictness".to_string())
        );
    }

    #[test]
    fn test_strict_rejects_author_list_shape() {
        let filter = StrictTitleFilter::new();
        let input = lines(&["John Smith, Jane Doe", "Robust Heuristics at Scale"]);
        assert_eq!(
            filter.select(&input),
            Some("Robust Heuristics at Scale".to_string())
        );
    }

    #[test]
    fn test_strict_rejects_rights_notice() {
        let filter = StrictTitleFilter::new();
        let input = lines(&["Copyright 2020 by the authors"]);
        assert_eq!(filter.select(&input), None);
    }

    #[test]
    fn test_strict_scan_limit() {
        let filter = StrictTitleFilter::new();
        let mut raw: Vec<String> = (0..15).map(|i| format!("{i}")).collect();
        raw.push("A Candidate Past the Scan Limit".to_string());
        assert_eq!(filter.select(&raw), None);
    }
}
