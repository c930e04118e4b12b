//! Text-layer access via MuPDF.
//!
//! Wraps the structured-text API behind a small capability type that
//! reports absence instead of errors: an unreadable document, an empty
//! page, or a missing text layer all surface as `None`.

use mupdf::{Document, Rect, TextPageOptions};
use std::path::Path;
use tracing::debug;

/// A horizontal band of a page, expressed as a fraction of its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageBand {
    /// The topmost `fraction` of the page.
    Top(f32),
    /// The bottommost `fraction` of the page.
    Bottom(f32),
}

/// Read-only view of a document's extractable text layer.
pub struct TextLayer {
    doc: Document,
}

impl TextLayer {
    /// Opens the text layer of the document at `path`.
    ///
    /// Returns `None` on any open failure.
    pub fn open(path: &Path) -> Option<Self> {
        let raw = path.to_str()?;
        match Document::open(raw) {
            Ok(doc) => Some(Self { doc }),
            Err(err) => {
                debug!(path = %path.display(), %err, "failed to open text layer");
                None
            }
        }
    }

    /// Number of pages; zero when the count cannot be read.
    pub fn page_count(&self) -> usize {
        self.doc
            .page_count()
            .map(|n| n.max(0) as usize)
            .unwrap_or(0)
    }

    /// Trimmed, non-empty text lines of page `index`, in layout order.
    pub fn page_lines(&self, index: usize) -> Option<Vec<String>> {
        let lines = self.collect_lines(index)?;
        let lines: Vec<String> = lines.into_iter().map(|(text, _)| text).collect();
        if lines.is_empty() {
            None
        } else {
            Some(lines)
        }
    }

    /// Full extractable text of page `index`; `None` when the page has no
    /// text layer.
    pub fn page_text(&self, index: usize) -> Option<String> {
        self.page_lines(index).map(|lines| lines.join("\n"))
    }

    /// Text of page `index` restricted to a horizontal band.
    ///
    /// A line contributes only when its bounding box lies entirely inside
    /// the band.
    pub fn band_text(&self, index: usize, band: PageBand) -> Option<String> {
        let page = self.doc.load_page(index as i32).ok()?;
        let bounds = page.bounds().ok()?;
        let height = bounds.y1 - bounds.y0;
        let lines = self.collect_lines(index)?;
        let selected: Vec<String> = lines
            .into_iter()
            .filter(|(_, rect)| match band {
                PageBand::Top(fraction) => rect.y1 <= bounds.y0 + height * fraction,
                PageBand::Bottom(fraction) => rect.y0 >= bounds.y1 - height * fraction,
            })
            .map(|(text, _)| text)
            .collect();
        if selected.is_empty() {
            None
        } else {
            Some(selected.join("\n"))
        }
    }

    fn collect_lines(&self, index: usize) -> Option<Vec<(String, Rect)>> {
        let page = self.doc.load_page(index as i32).ok()?;
        let text_page = page.to_text_page(TextPageOptions::empty()).ok()?;
        let mut lines = Vec::new();
        for block in text_page.blocks() {
            for line in block.lines() {
                let rect = line.bounds();
                let text: String = line.chars().filter_map(|c| c.char()).collect();
                let text = text.trim();
                if !text.is_empty() {
                    lines.push((text.to_string(), rect));
                }
            }
        }
        Some(lines)
    }
}
