//! The rename pipeline.
//!
//! Orchestrates per-file processing: title extraction through an ordered
//! strategy list, sanitization, year lookup, template rendering, collision
//! resolution, and the rename itself (or a logged preview). Single-file
//! failures never abort the run; they accumulate in the run report.

pub mod observer;
pub mod report;
pub mod template;

pub use observer::{NoopObserver, RunObserver};
pub use report::RunReport;
pub use template::{resolve_collision, FilenameTemplate};

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::filename::sanitize;
use crate::error::{RetitleError, RetitleResult};
use crate::extract::{default_title_sources, year, TitleSource};

/// Placeholder used when no publication year can be found.
pub const UNKNOWN_YEAR: &str = "unknown year";

/// Fatal message for an input folder without PDF files.
pub const NO_FILES_MESSAGE: &str = "no PDF files found";

/// Options for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Filename pattern applied to every renamed file.
    pub template: FilenameTemplate,

    /// When set, intended renames are logged but the filesystem is left
    /// untouched.
    pub dry_run: bool,
}

/// Coordinates title extraction, year lookup, and renaming for every PDF
/// file in a folder.
pub struct RenameService {
    sources: Vec<Box<dyn TitleSource>>,
}

impl RenameService {
    /// Creates a service with an explicit title-method priority list.
    pub fn new(sources: Vec<Box<dyn TitleSource>>) -> Self {
        Self { sources }
    }

    /// Creates a service with the default method priority: metadata,
    /// content analysis, advanced heuristic.
    pub fn with_default_sources() -> Self {
        Self::new(default_title_sources())
    }

    /// Processes every `.pdf` file in `folder` (non-recursive, filesystem
    /// order).
    ///
    /// Returns the run report; the only error condition is an input folder
    /// that cannot be enumerated at all. An empty folder yields a fatal
    /// report, not an error.
    pub fn process(
        &self,
        folder: &Path,
        options: &RunOptions,
        observer: &mut dyn RunObserver,
    ) -> RetitleResult<RunReport> {
        let files = list_pdf_files(folder)?;
        if files.is_empty() {
            observer.log(NO_FILES_MESSAGE);
            return Ok(RunReport::fatal(NO_FILES_MESSAGE));
        }

        observer.log(&format!(
            "found {} PDF files, using template: {}",
            files.len(),
            options.template.pattern()
        ));

        let total = files.len();
        let mut report = RunReport::default();

        for (index, file) in files.iter().enumerate() {
            let display_name = file_name(file);
            observer.progress(index + 1, total, &display_name);
            observer.log(&format!("\nprocessing: {display_name}"));

            let Some(title) = self.extract_title(file, observer) else {
                observer.log("  no title could be extracted, skipping");
                report.failed.push(display_name);
                continue;
            };

            let Some(clean_title) = sanitize(&title) else {
                observer.log("  title sanitization failed, skipping");
                report.failed.push(display_name);
                continue;
            };

            let year = match year::extract_year(file) {
                Some(year) => {
                    observer.log(&format!("  found year: {year}"));
                    year
                }
                None => {
                    observer.log(&format!("  no year found, using '{UNKNOWN_YEAR}'"));
                    UNKNOWN_YEAR.to_string()
                }
            };

            let rendered = options.template.render(&clean_title, &year);
            let target = resolve_collision(folder, &rendered, file);
            let target_name = file_name(&target);

            if options.dry_run {
                observer.log(&format!("  preview: {display_name} -> {target_name}"));
                report.renamed += 1;
            } else {
                match fs::rename(file, &target) {
                    Ok(()) => {
                        observer.log(&format!("  renamed: {target_name}"));
                        report.renamed += 1;
                    }
                    Err(err) => {
                        debug!(
                            source = %file.display(),
                            target = %target.display(),
                            %err,
                            "rename failed",
                        );
                        observer.log(&format!("  rename failed: {err}"));
                        report.failed.push(display_name);
                    }
                }
            }
        }

        log_summary(observer, &report, options.dry_run);
        observer.progress(total, total, "done");
        Ok(report)
    }

    /// Tries each title method in priority order; the first hit wins and
    /// the remaining methods are not consulted.
    fn extract_title(&self, file: &Path, observer: &mut dyn RunObserver) -> Option<String> {
        for source in &self.sources {
            match source.extract(file) {
                Some(title) => {
                    observer.log(&format!(
                        "  {} succeeded: {}...",
                        source.name(),
                        preview(&title)
                    ));
                    return Some(title);
                }
                None => observer.log(&format!("  {} failed", source.name())),
            }
        }
        None
    }
}

/// Non-recursive listing of `.pdf` files; the extension is matched
/// case-insensitively, order is whatever the filesystem provides.
fn list_pdf_files(folder: &Path) -> RetitleResult<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(RetitleError::NotADirectory {
            path: folder.to_path_buf(),
        });
    }
    let entries = fs::read_dir(folder).map_err(|source| RetitleError::Io {
        path: folder.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| RetitleError::Io {
            path: folder.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_pdf = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            files.push(path);
        }
    }
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// First 80 characters of an extracted title, for log lines.
fn preview(title: &str) -> String {
    title.chars().take(80).collect()
}

fn log_summary(observer: &mut dyn RunObserver, report: &RunReport, dry_run: bool) {
    observer.log(&format!("\n{}", "=".repeat(50)));
    observer.log("done!");
    if dry_run {
        observer.log(&format!(
            "preview mode - would rename {} file(s)",
            report.renamed
        ));
    } else {
        observer.log(&format!("renamed {} file(s)", report.renamed));
    }
    if report.failed.is_empty() {
        observer.log("no failed files");
    } else {
        observer.log(&format!("failed files ({}):", report.failed.len()));
        for name in &report.failed {
            observer.log(&format!("  - {name}"));
        }
    }
}
