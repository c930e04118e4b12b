//! Test fixtures and PDF builders.
//!
//! The builder lays text lines out top-to-bottom from the top margin of an
//! A4 page; footer lines land in the bottom fifth. Because PDF writers set
//! their own Info metadata (producer, creation date), tests that depend on
//! metadata always pin it afterwards with [`set_info_string`] /
//! [`strip_info_keys`].

use anyhow::Result;
use lopdf::{Dictionary, Object};
use printpdf::*;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use retitle::RunObserver;

/// Builder for test PDFs with controlled text lines.
#[derive(Debug, Clone)]
pub struct TestPdfBuilder {
    title: String,
    lines: Vec<String>,
    footer_lines: Vec<String>,
    page_width: Mm,
    page_height: Mm,
}

impl TestPdfBuilder {
    /// Creates a new builder with an A4 page and a default title.
    pub fn new() -> Self {
        Self {
            title: "Test Document".to_string(),
            lines: Vec::new(),
            footer_lines: Vec::new(),
            page_width: Mm(210.0),
            page_height: Mm(297.0),
        }
    }

    /// Sets the document title passed to the PDF writer.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Adds a body text line near the top of the page.
    pub fn with_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Adds a text line inside the bottom fifth of the page.
    pub fn with_footer_line(mut self, line: &str) -> Self {
        self.footer_lines.push(line.to_string());
        self
    }

    /// Builds the PDF and writes it to `output_path`.
    pub fn build(self, output_path: &Path) -> Result<PathBuf> {
        let (doc, page1, layer1) = PdfDocument::new(
            &self.title,
            self.page_width,
            self.page_height,
            "Layer 1",
        );
        let current_layer = doc.get_page(page1).get_layer(layer1);
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

        let mut y = self.page_height.0 - 25.0;
        for line in &self.lines {
            current_layer.use_text(line, 12.0, Mm(20.0), Mm(y), &font);
            y -= 8.0;
        }

        let mut y = 20.0;
        for line in &self.footer_lines {
            current_layer.use_text(line, 10.0, Mm(20.0), Mm(y), &font);
            y -= 6.0;
        }

        doc.save(&mut BufWriter::new(fs::File::create(output_path)?))?;
        Ok(output_path.to_path_buf())
    }
}

impl Default for TestPdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Sets a string entry in the document's Info dictionary, creating the
/// dictionary when missing.
pub fn set_info_string(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut doc = ::lopdf::Document::load(path)?;
    let existing = match doc.trailer.get(b"Info") {
        Ok(Object::Reference(id)) => Some(*id),
        _ => None,
    };
    let info_id = match existing {
        Some(id) => id,
        None => {
            let id = doc.add_object(Dictionary::new());
            doc.trailer.set("Info", Object::Reference(id));
            id
        }
    };
    if let Ok(Object::Dictionary(info)) = doc.get_object_mut(info_id) {
        info.set(key.as_bytes().to_vec(), Object::string_literal(value));
    }
    doc.save(path)?;
    Ok(())
}

/// Removes entries from the Info dictionary, when present.
pub fn strip_info_keys(path: &Path, keys: &[&str]) -> Result<()> {
    let mut doc = ::lopdf::Document::load(path)?;
    let info_id = match doc.trailer.get(b"Info") {
        Ok(Object::Reference(id)) => Some(*id),
        _ => None,
    };
    if let Some(id) = info_id {
        if let Ok(Object::Dictionary(info)) = doc.get_object_mut(id) {
            for key in keys {
                info.remove(key.as_bytes());
            }
        }
        doc.save(path)?;
    }
    Ok(())
}

/// Removes every metadata field the extractors consult.
pub fn strip_extractable_metadata(path: &Path) -> Result<()> {
    strip_info_keys(path, &["Title", "CreationDate", "ModDate"])
}

/// Observer that records every log line and progress tick.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub logs: Vec<String>,
    pub ticks: Vec<(usize, usize, String)>,
}

impl RunObserver for RecordingObserver {
    fn log(&mut self, line: &str) {
        self.logs.push(line.to_string());
    }

    fn progress(&mut self, current: usize, total: usize, filename: &str) {
        self.ticks.push((current, total, filename.to_string()));
    }
}

impl RecordingObserver {
    /// True when any recorded line contains `needle`.
    pub fn logged(&self, needle: &str) -> bool {
        self.logs.iter().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builder_creates_valid_pdf() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let pdf_path = temp_dir.path().join("test.pdf");

        TestPdfBuilder::new()
            .with_title("Builder Check")
            .with_line("A line of body text")
            .build(&pdf_path)?;

        assert!(pdf_path.exists());
        assert!(::lopdf::Document::load(&pdf_path).is_ok());
        Ok(())
    }
}
