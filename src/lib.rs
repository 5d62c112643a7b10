#![forbid(unsafe_code)]

//! Codacy adapter for Pylint
//!
//! This crate wraps the Pylint command-line tool: it resolves which checks are
//! enabled from a `.codacyrc` configuration file, discovers Python source
//! files under a source root, runs Pylint over them in bounded batches, and
//! normalizes the textual report into structured diagnostic records.

pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod timeout;
pub mod types;

// Re-export error types for convenient access
pub use error::{AnalysisError, CodacyrcError, ParseError};

// Re-export core domain types for convenient access
pub use types::{Diagnostic, RuleFilter};
