//! Error types for the adapter
//!
//! This module defines the error types used throughout the adapter, following
//! a hierarchical structure with specific error variants for different
//! error categories.
//!
//! Configuration problems are deliberately absent from the fatal path: a
//! missing or malformed `.codacyrc` falls back to an unrestricted full-tree
//! scan instead of failing the run.

use std::path::PathBuf;

/// Problems reading or interpreting the `.codacyrc` document.
///
/// All variants are recovered by falling back to "no filter, walk the whole
/// tree"; they exist so the caller can tell "no configuration supplied" apart
/// from "configuration supplied but invalid" when reporting to stderr.
#[derive(Debug, thiserror::Error)]
pub enum CodacyrcError {
    /// No configuration file at the expected location
    #[error("configuration file not found: {0}")]
    Missing(PathBuf),

    /// The file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but is not the expected JSON document
    #[error("malformed configuration in {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Hard failures while normalizing Pylint's textual output
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A three-segment report line whose message does not match the
    /// `[<id>(<symbol>...] <message>` shape
    #[error("unrecognized message format in report line: {0:?}")]
    MalformedMessage(String),

    /// A three-segment report line whose line field is not a base-10 integer
    #[error("invalid line number {segment:?} in report line: {line:?}")]
    InvalidLineNumber { segment: String, line: String },
}

/// Top-level error type for an analysis run
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Failed to spawn or communicate with the Pylint subprocess
    #[error("failed to run pylint: {0}")]
    Subprocess(#[source] std::io::Error),

    /// Pylint's report did not parse
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
