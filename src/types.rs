#![forbid(unsafe_code)]

//! Core domain types for the adapter
//!
//! This module defines the diagnostic record emitted to the platform and the
//! rule filter derived from the configuration.

use serde::Serialize;

/// One structured finding produced by analyzing source code.
///
/// `filename` is relative to the scanned source root by the time results are
/// returned to the caller. Equality is structural over all four fields.
/// Serialization keys are `filename`, `line`, `message`, `patternId` — in
/// that (alphabetical) order, one JSON object per line on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Path of the offending file, relative to the source root
    pub filename: String,
    /// 1-based line number of the finding
    pub line: u32,
    /// Human-readable message text
    pub message: String,
    /// Pylint rule identifier, e.g. `E0711`
    #[serde(rename = "patternId")]
    pub pattern_id: String,
}

impl Diagnostic {
    pub fn new(
        filename: impl Into<String>,
        message: impl Into<String>,
        pattern_id: impl Into<String>,
        line: u32,
    ) -> Self {
        Diagnostic {
            filename: filename.into(),
            line,
            message: message.into(),
            pattern_id: pattern_id.into(),
        }
    }
}

/// The set of rule identifiers a run is restricted to.
///
/// Computed once from the configuration and passed unchanged into every batch
/// invocation. Either empty (Pylint's own defaults apply) or a list of
/// identifiers meaning "disable every rule, then enable exactly these".
/// Configuration order is preserved; duplicates pass through uncombined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleFilter {
    enabled: Vec<String>,
}

impl RuleFilter {
    /// A filter that imposes no restriction beyond Pylint's defaults
    pub fn unrestricted() -> Self {
        RuleFilter::default()
    }

    /// A filter restricting the run to exactly the given identifiers
    pub fn restricted_to(ids: Vec<String>) -> Self {
        RuleFilter { enabled: ids }
    }

    /// True when no restriction applies
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Renders the filter as Pylint command-line flags.
    ///
    /// Empty filter yields no flags; otherwise the pair
    /// `--disable=all` and `--enable=<id1,id2,...>`.
    pub fn to_args(&self) -> Vec<String> {
        if self.enabled.is_empty() {
            return Vec::new();
        }
        vec![
            "--disable=all".to_string(),
            format!("--enable={}", self.enabled.join(",")),
        ]
    }
}
