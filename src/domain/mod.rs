//! Pure text heuristics for title and year extraction.
//!
//! Everything in this module operates on plain strings: the year matcher,
//! the title-candidate line filters, and the filename sanitizer. No I/O
//! happens here, which keeps the heuristics fully unit-testable.

pub mod filename;
pub mod title;
pub mod year;

pub use filename::sanitize;
pub use title::{BasicTitleFilter, StrictTitleFilter, TitleFilter};
pub use year::YearMatcher;
