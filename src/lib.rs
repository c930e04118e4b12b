//! Heuristic PDF renaming library.
//!
//! This library renames PDF files from a heuristically extracted title and
//! publication year. Titles come from the embedded metadata when present,
//! falling back to positional heuristics over the first page's text layer;
//! years come from the metadata date fields or a bounded scan of the
//! leading pages. Extraction is heuristic and lossy; every per-file
//! failure is recorded and skipped rather than raised.
//!
//! # Architecture
//!
//! - [`domain`]: pure text heuristics (year matcher, title line filters,
//!   filename sanitizer)
//! - [`extract`]: PDF-backed extraction via lopdf (metadata) and MuPDF
//!   (text layer), plus the ordered title-method list
//! - [`rename`]: the pipeline (templates, collision resolution, observer
//!   interfaces, and the run report)
//! - [`error`]: run-level error handling
//!
//! # Quick Start
//!
//! ```no_run
//! use retitle::{NoopObserver, RenameService, RunOptions};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RenameService::with_default_sources();
//! let options = RunOptions::default(); // {title}.pdf, preview off
//!
//! let report = service.process(Path::new("papers/"), &options, &mut NoopObserver)?;
//! println!("renamed {} file(s)", report.renamed);
//! # Ok(())
//! # }
//! ```
//!
//! # Preview mode
//!
//! ```no_run
//! use retitle::{FilenameTemplate, NoopObserver, RenameService, RunOptions};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = RunOptions {
//!     template: FilenameTemplate::new("{year}_{title}.pdf"),
//!     dry_run: true,
//! };
//!
//! let service = RenameService::with_default_sources();
//! let report = service.process(Path::new("papers/"), &options, &mut NoopObserver)?;
//! # Ok(())
//! # }
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod extract;
pub mod rename;

// Re-exports for convenient access
pub use domain::{sanitize, BasicTitleFilter, StrictTitleFilter, TitleFilter, YearMatcher};
pub use error::{RetitleError, RetitleResult};
pub use extract::{default_title_sources, TitleSource};
pub use rename::{
    resolve_collision, FilenameTemplate, NoopObserver, RenameService, RunObserver, RunOptions,
    RunReport, NO_FILES_MESSAGE, UNKNOWN_YEAR,
};
