//! Parsing and interpretation of the `.codacyrc` configuration document
//!
//! The platform mounts a JSON document describing which files to analyze and
//! which patterns each tool should report. This module models that document
//! and derives the rule filter for the Pylint entry. Recovery from a missing
//! or malformed document happens one level up, in `engine::read_configuration`.

use crate::error::CodacyrcError;
use crate::types::RuleFilter;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The `tools` entry name the platform uses for this adapter
pub const TOOL_NAME: &str = "PyLint (Python 3)";

/// Top-level `.codacyrc` document
#[derive(Debug, Clone, Deserialize)]
pub struct CodacyConfig {
    /// Explicit list of files to analyze, relative to the source root
    #[serde(default)]
    pub files: Option<Vec<String>>,

    /// Per-tool configuration entries
    pub tools: Vec<ToolConfig>,
}

/// One entry of the `tools` array
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    pub name: String,

    /// Patterns the platform wants reported; absent means "tool defaults"
    #[serde(default)]
    pub patterns: Option<Vec<PatternRef>>,
}

/// Reference to a single enabled pattern
#[derive(Debug, Clone, Deserialize)]
pub struct PatternRef {
    #[serde(rename = "patternId")]
    pub pattern_id: String,
}

impl CodacyConfig {
    /// Load the configuration from a file.
    ///
    /// Distinguishes "no file at all" from "file present but unreadable or
    /// malformed" so the caller can report the latter while staying silent
    /// about the former.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CodacyrcError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CodacyrcError::Missing(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| CodacyrcError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| CodacyrcError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse the configuration from a JSON string
    pub fn parse(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Derive the rule filter from the matching tool entry.
    ///
    /// A configuration without a `"PyLint (Python 3)"` entry and one whose
    /// entry carries no `patterns` key are handled identically: no
    /// restriction, Pylint's own defaults apply. Pattern order is preserved
    /// and duplicates pass through.
    pub fn rule_filter(&self) -> RuleFilter {
        let tool = self.tools.iter().find(|t| t.name == TOOL_NAME);
        match tool.and_then(|t| t.patterns.as_ref()) {
            Some(patterns) => RuleFilter::restricted_to(
                patterns.iter().map(|p| p.pattern_id.clone()).collect(),
            ),
            None => RuleFilter::unrestricted(),
        }
    }

    /// The explicit file list, if present and non-empty
    pub fn explicit_files(&self) -> Option<&[String]> {
        match self.files.as_deref() {
            Some([]) | None => None,
            Some(files) => Some(files),
        }
    }
}
