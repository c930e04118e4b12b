//! Error types for the PDF renaming library.
//!
//! The surface here is deliberately small. Every extractor swallows its own
//! parse failures and reports absence instead of an error: a file that cannot
//! be read ends up in the run report's failed list, not in a `Result::Err`.
//! Only conditions that prevent a run from enumerating its input at all are
//! represented as errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for renaming operations.
pub type RetitleResult<T> = Result<T, RetitleError>;

/// Errors a rename run can surface to its caller.
#[derive(Debug, Error)]
pub enum RetitleError {
    /// The input folder could not be read.
    #[error("IO error for path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The supplied input path is not a directory.
    #[error("'{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
}
