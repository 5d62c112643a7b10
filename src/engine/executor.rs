//! Batch invocation of the Pylint subprocess
//!
//! Files are partitioned into fixed-size batches to bound command-line length,
//! and Pylint runs once per batch, strictly sequentially. Only stdout is
//! captured; the exit status is never inspected because Pylint exits non-zero
//! whenever it reports violations.

use crate::engine::parser;
use crate::error::AnalysisError;
use crate::types::{Diagnostic, RuleFilter};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Maximum number of files per Pylint invocation
pub const CHUNK_SIZE: usize = 10;

/// Flags passed to every invocation: machine-parseable output, the Django and
/// Flask integration plugins, and the two Django checks known to
/// false-positive outside a configured Django project.
const BASE_ARGS: &[&str] = &[
    "--output-format=parseable",
    "--load-plugins=pylint_django",
    "--disable=django-installed-checker,django-model-checker",
    "--load-plugins=pylint_flask",
];

/// Partition `list` into contiguous pieces of at most `n` elements.
///
/// Order-preserving; the last piece may be shorter. `n` must be non-zero.
pub fn chunks<T>(list: &[T], n: usize) -> Vec<&[T]> {
    if list.is_empty() {
        return Vec::new();
    }
    list.chunks(n).collect()
}

/// Runs Pylint over batches of files with a fixed rule filter.
pub struct PylintInvoker {
    rule_filter: RuleFilter,
    src_root: PathBuf,
}

impl PylintInvoker {
    pub fn new(rule_filter: RuleFilter, src_root: impl Into<PathBuf>) -> Self {
        PylintInvoker {
            rule_filter,
            src_root: src_root.into(),
        }
    }

    /// Run one batch synchronously and return its parsed diagnostics.
    ///
    /// The working directory is the source root so Pylint's own path
    /// normalization matches the adapter's. A spawn failure (interpreter or
    /// Pylint missing) is an error; a non-zero exit from Pylint is not.
    pub fn run_batch(&self, files: &[PathBuf]) -> Result<Vec<Diagnostic>, AnalysisError> {
        let output = Command::new("python3")
            .arg("-m")
            .arg("pylint")
            .args(BASE_ARGS)
            .args(self.rule_filter.to_args())
            .args(files)
            .current_dir(&self.src_root)
            .stdout(Stdio::piped())
            .output()
            .map_err(AnalysisError::Subprocess)?;

        let report = String::from_utf8_lossy(&output.stdout);
        Ok(parser::parse_report(&report)?)
    }
}
