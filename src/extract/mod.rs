//! PDF-backed extraction.
//!
//! This module is the boundary to the two external PDF capabilities:
//! embedded metadata (lopdf) and the text layer (MuPDF). Every operation
//! here returns `Option` and swallows parse failures at its own boundary;
//! a corrupt or unreadable document surfaces to the pipeline as "nothing
//! found", never as an error.

pub mod content;
pub mod metadata;
pub mod text_layer;
pub mod year;

use std::path::Path;

/// A single title-extraction method.
pub trait TitleSource: Send + Sync {
    /// Human-readable method name used in log lines.
    fn name(&self) -> &str;

    /// Attempts to extract a title; `None` on failure of any kind.
    fn extract(&self, pdf: &Path) -> Option<String>;
}

/// Title via the embedded metadata `Title` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataTitle;

/// Title via the permissive first-page line heuristics.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTitle;

/// Title via the strict exclusion-list heuristics.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictContentTitle;

impl TitleSource for MetadataTitle {
    fn name(&self) -> &str {
        "metadata"
    }

    fn extract(&self, pdf: &Path) -> Option<String> {
        metadata::title_from_metadata(pdf)
    }
}

impl TitleSource for ContentTitle {
    fn name(&self) -> &str {
        "content analysis"
    }

    fn extract(&self, pdf: &Path) -> Option<String> {
        content::title_from_content(pdf)
    }
}

impl TitleSource for StrictContentTitle {
    fn name(&self) -> &str {
        "advanced heuristic"
    }

    fn extract(&self, pdf: &Path) -> Option<String> {
        content::title_from_content_strict(pdf)
    }
}

/// The default method priority: metadata, then content analysis, then the
/// strict heuristic. The pipeline evaluates the list in order and stops at
/// the first method that produces a title.
pub fn default_title_sources() -> Vec<Box<dyn TitleSource>> {
    vec![
        Box::new(MetadataTitle),
        Box::new(ContentTitle),
        Box::new(StrictContentTitle),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_order() {
        let sources = default_title_sources();
        let names: Vec<&str> = sources.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["metadata", "content analysis", "advanced heuristic"]);
    }
}
