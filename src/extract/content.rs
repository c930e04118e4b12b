//! Content-based title extraction from the first page's text layer.

use std::path::Path;
use tracing::debug;

use super::text_layer::TextLayer;
use crate::domain::title::{BasicTitleFilter, StrictTitleFilter, TitleFilter};

/// Derives a title candidate from the first page with the permissive
/// filter: topmost plausible line among the first 10.
///
/// Returns `None` on any extraction failure.
pub fn title_from_content(path: &Path) -> Option<String> {
    select_title(path, &BasicTitleFilter::new())
}

/// Strict variant: first surviving line among the first 15 after the
/// exclusion keyword and shape checks.
///
/// Returns `None` on any extraction failure.
pub fn title_from_content_strict(path: &Path) -> Option<String> {
    select_title(path, &StrictTitleFilter::new())
}

fn select_title(path: &Path, filter: &dyn TitleFilter) -> Option<String> {
    let layer = TextLayer::open(path)?;
    let lines = layer.page_lines(0)?;
    let title = filter.select(&lines);
    if title.is_none() {
        debug!(path = %path.display(), "no qualifying title line on first page");
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_file_is_absent() {
        let path = Path::new("/definitely/not/here.pdf");
        assert_eq!(title_from_content(path), None);
        assert_eq!(title_from_content_strict(path), None);
    }
}
