//! Pipeline orchestration: configuration, discovery, batching, normalization

pub mod executor;
pub mod file_walker;
pub mod parser;
pub mod syntax;

use crate::config::CodacyConfig;
use crate::error::{AnalysisError, CodacyrcError};
use crate::types::{Diagnostic, RuleFilter};
use std::path::{Path, PathBuf};

/// Resolve the rule filter and the list of files to analyze.
///
/// Any problem with the configuration file recovers to "no rule filter, scan
/// the entire tree". A missing file is the documented no-configuration mode
/// and stays silent; a file that is present but unreadable or malformed gets
/// one warning line on stderr before the same fallback. Stdout is never
/// touched here.
///
/// The returned paths are relative to `src_dir` and filtered down to files
/// that parse as Python 3 (see `syntax::is_valid_python`).
pub fn read_configuration(config_file: &Path, src_dir: &Path) -> (RuleFilter, Vec<PathBuf>) {
    let (filter, candidates) = match CodacyConfig::load(config_file) {
        Ok(config) => {
            let files = match config.explicit_files() {
                Some(files) => files.iter().map(PathBuf::from).collect(),
                None => file_walker::walk(src_dir),
            };
            (config.rule_filter(), files)
        }
        Err(CodacyrcError::Missing(_)) => {
            (RuleFilter::unrestricted(), file_walker::walk(src_dir))
        }
        Err(err) => {
            eprintln!("Warning: {err}; analyzing the whole tree with default checks");
            (RuleFilter::unrestricted(), file_walker::walk(src_dir))
        }
    };

    let files = candidates
        .into_iter()
        .filter(|f| syntax::is_valid_python(&src_dir.join(f)))
        .collect();
    (filter, files)
}

/// Run the whole pipeline: resolve configuration, batch the file list,
/// invoke Pylint per batch, and return the accumulated diagnostics.
///
/// Every returned diagnostic's `filename` is relative to `src_dir`.
pub fn run_tool(config_file: &Path, src_dir: &Path) -> Result<Vec<Diagnostic>, AnalysisError> {
    let (rule_filter, files) = read_configuration(config_file, src_dir);
    let invoker = executor::PylintInvoker::new(rule_filter, src_dir);

    let with_path: Vec<PathBuf> = files.iter().map(|f| src_dir.join(f)).collect();
    let mut results = Vec::new();
    for chunk in executor::chunks(&with_path, executor::CHUNK_SIZE) {
        results.extend(invoker.run_batch(chunk)?);
    }

    // Pylint echoes paths the way they were passed on the command line, so
    // strip the root prefix to keep every filename root-relative.
    for diag in &mut results {
        if let Ok(rel) = Path::new(&diag.filename).strip_prefix(src_dir) {
            diag.filename = rel.to_string_lossy().into_owned();
        }
    }
    Ok(results)
}
