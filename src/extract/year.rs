//! Composed year lookup.
//!
//! Metadata date fields take priority; when they carry nothing, the leading
//! pages' text is scanned with the year matcher, full page first and then
//! the top and bottom bands separately. The band passes catch layouts where
//! a running head or footer holds the date.

use std::path::Path;

use super::metadata;
use super::text_layer::{PageBand, TextLayer};
use crate::domain::year::YearMatcher;

/// Pages scanned for a year before giving up.
const YEAR_SCAN_PAGES: usize = 3;

/// Height fraction of the top and bottom bands scanned separately.
const BAND_FRACTION: f32 = 0.2;

/// Finds a publication year for the document.
///
/// Sub-attempts run in a fixed order and the first hit wins: creation and
/// modification dates, then for each of the first three pages the full
/// text, the top band, and the bottom band. Returns `None` when every
/// attempt comes up empty or the document is unreadable.
pub fn extract_year(path: &Path) -> Option<String> {
    if let Some(year) = metadata::year_from_metadata(path) {
        return Some(year);
    }

    let layer = TextLayer::open(path)?;
    let matcher = YearMatcher::new();
    for page in 0..layer.page_count().min(YEAR_SCAN_PAGES) {
        let Some(text) = layer.page_text(page) else {
            continue;
        };
        if let Some(year) = matcher.find_year(&text) {
            return Some(year);
        }
        for band in [PageBand::Top(BAND_FRACTION), PageBand::Bottom(BAND_FRACTION)] {
            if let Some(band_text) = layer.band_text(page, band) {
                if let Some(year) = matcher.find_year(&band_text) {
                    return Some(year);
                }
            }
        }
    }
    None
}
