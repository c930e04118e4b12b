//! Filename templates and collision resolution.

use std::path::{Path, PathBuf};

/// Placeholder substituted with the extracted year.
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Placeholder substituted with the sanitized title.
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// A filename pattern with optional `{year}` and `{title}` placeholders.
///
/// Substitution is plain text replacement: placeholders may repeat or be
/// absent, and unknown placeholders are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTemplate {
    pattern: String,
}

impl FilenameTemplate {
    /// Creates a template from a raw pattern string.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// The raw pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Renders the template with the given title and year.
    pub fn render(&self, title: &str, year: &str) -> String {
        self.pattern
            .replace(YEAR_PLACEHOLDER, year)
            .replace(TITLE_PLACEHOLDER, title)
    }

    /// The preset patterns offered to interactive callers.
    pub fn presets() -> &'static [&'static str] {
        &[
            "{title}.pdf",
            "{year}_{title}.pdf",
            "{title}_{year}.pdf",
            "({year})_{title}.pdf",
            "{title}-{year}.pdf",
            "{year}-{title}.pdf",
        ]
    }
}

impl Default for FilenameTemplate {
    /// The fixed-pattern variant: title only.
    fn default() -> Self {
        Self::new("{title}.pdf")
    }
}

/// Resolves a unique target path for `filename` inside `dir`.
///
/// When the rendered name already exists and is not `source` itself, an
/// incrementing numeric suffix is inserted before the extension,
/// re-checking existence after each increment, until a free name is found.
pub fn resolve_collision(dir: &Path, filename: &str, source: &Path) -> PathBuf {
    let target = dir.join(filename);
    if !target.exists() || target == source {
        return target;
    }
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let ext = Path::new(filename).extension().and_then(|s| s.to_str());
    let mut counter = 1;
    loop {
        let candidate = match ext {
            Some(ext) => format!("{stem}_{counter}.{ext}"),
            None => format!("{stem}_{counter}"),
        };
        let target = dir.join(candidate);
        if !target.exists() || target == source {
            return target;
        }
        counter += 1;
    }
}
