//! Common test utilities and helpers.
//!
//! Provides shared functionality for the integration tests: a PDF fixture
//! builder, deterministic metadata editing helpers, and a recording
//! observer.

pub mod fixtures;

pub use fixtures::*;
