//! Aggregated result of one rename run.

/// Summary of a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Files renamed, or that would have been renamed in preview mode.
    pub renamed: usize,

    /// Original filenames that could not be processed, in encounter order.
    pub failed: Vec<String>,

    /// Set only when the run could not start (no PDF files found).
    pub fatal: Option<String>,
}

impl RunReport {
    /// Creates the fatal "nothing to do" report.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            fatal: Some(message.into()),
            ..Default::default()
        }
    }

    /// True when the run aborted before processing any file.
    pub fn is_fatal(&self) -> bool {
        self.fatal.is_some()
    }
}
