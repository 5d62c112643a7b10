//! Syntax-validity filtering of candidate files
//!
//! Files written for an incompatible Python version (or with genuine syntax
//! defects) make Pylint report a single fatal parse error instead of useful
//! diagnostics, so they are excluded from the scanned set up front. Exclusion
//! is silent — a known limitation carried over from the adapter's contract:
//! genuine syntax errors are dropped from analysis, not surfaced.

use std::fs;
use std::path::Path;
use tree_sitter::Parser;

/// Check whether a file parses as Python 3.
///
/// Three outcomes:
/// - parses without error nodes: valid
/// - the parse tree contains syntax errors: invalid
/// - the file cannot be read or decoded, or the parser cannot be set up:
///   valid (fail open, so files are never excluded for infrastructure
///   reasons)
pub fn is_valid_python(path: &Path) -> bool {
    match fs::read_to_string(path) {
        Ok(source) => parses_cleanly(&source),
        Err(_) => true,
    }
}

fn parses_cleanly(source: &str) -> bool {
    let mut parser = Parser::new();
    if parser.set_language(&tree_sitter_python::language()).is_err() {
        return true;
    }
    match parser.parse(source, None) {
        Some(tree) => !tree.root_node().has_error(),
        None => true,
    }
}
