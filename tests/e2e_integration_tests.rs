//! End-to-end tests running the real Pylint toolchain
//!
//! These require `python3` with Pylint plus the pylint_django and
//! pylint_flask plugins on PATH — the same prerequisites the shipped adapter
//! image has. When the toolchain is absent the tests skip themselves rather
//! than fail.

use codacy_pylint::Diagnostic;
use codacy_pylint::engine::run_tool;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Probe for a Pylint able to load the plugins the adapter always enables.
fn pylint_available() -> bool {
    Command::new("python3")
        .args([
            "-m",
            "pylint",
            "--load-plugins=pylint_django",
            "--load-plugins=pylint_flask",
            "--version",
        ])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn setup(dir: &Path, codacyrc: Option<&str>, sources: &[(&str, &str)]) {
    if let Some(config) = codacyrc {
        fs::write(dir.join(".codacyrc"), config).unwrap();
    }
    for (name, source) in sources {
        fs::write(dir.join(name), source).unwrap();
    }
}

const DUPLICATE_RAISE: &str = "raise NotImplemented\nraise NotImplementedError\n";

#[test]
fn test_restricted_run_reports_single_duplicate_raise() {
    if !pylint_available() {
        eprintln!("skipping: pylint toolchain not available");
        return;
    }
    let dir = TempDir::new().unwrap();
    setup(
        dir.path(),
        Some(r#"{"tools":[{"name":"PyLint (Python 3)","patterns":[{"patternId":"E0711"}]}],"files":["E0711.py"]}"#),
        &[("E0711.py", DUPLICATE_RAISE)],
    );

    let results = run_tool(&dir.path().join(".codacyrc"), dir.path()).unwrap();
    assert_eq!(
        results,
        vec![Diagnostic::new(
            "E0711.py",
            "NotImplemented raised - should raise NotImplementedError",
            "E0711",
            1
        )]
    );
}

#[test]
fn test_missing_keyword_argument_lines() {
    if !pylint_available() {
        eprintln!("skipping: pylint toolchain not available");
        return;
    }
    let source = "\
def function(*, foo):
    print(foo)

function(foo=1)

foo = 1
function(foo)
function(1)
";
    let dir = TempDir::new().unwrap();
    setup(
        dir.path(),
        Some(r#"{"tools":[{"name":"PyLint (Python 3)","patterns":[{"patternId":"E1125"}]}],"files":["E1125.py"]}"#),
        &[("E1125.py", source)],
    );

    let results = run_tool(&dir.path().join(".codacyrc"), dir.path()).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|d| d.pattern_id == "E1125"));
    assert!(results.iter().all(|d| d.filename == "E1125.py"));
    assert_eq!(
        results.iter().map(|d| d.line).collect::<Vec<_>>(),
        vec![7, 8]
    );
}

#[test]
fn test_restricted_results_are_strict_subset_of_unrestricted() {
    if !pylint_available() {
        eprintln!("skipping: pylint toolchain not available");
        return;
    }
    let restricted = {
        let dir = TempDir::new().unwrap();
        setup(
            dir.path(),
            Some(r#"{"tools":[{"name":"PyLint (Python 3)","patterns":[{"patternId":"E0711"}]}],"files":["E0711.py"]}"#),
            &[("E0711.py", DUPLICATE_RAISE)],
        );
        run_tool(&dir.path().join(".codacyrc"), dir.path()).unwrap()
    };
    let unrestricted = {
        let dir = TempDir::new().unwrap();
        setup(dir.path(), None, &[("E0711.py", DUPLICATE_RAISE)]);
        run_tool(&dir.path().join(".codacyrc"), dir.path()).unwrap()
    };

    assert!(!restricted.is_empty());
    for diag in &restricted {
        assert!(
            unrestricted.contains(diag),
            "restricted diagnostic missing from unrestricted run: {diag:?}"
        );
    }
    assert!(restricted.len() < unrestricted.len());
}

#[test]
fn test_more_than_one_batch() {
    if !pylint_available() {
        eprintln!("skipping: pylint toolchain not available");
        return;
    }
    // 12 files exercise two chunks (10 + 2).
    let dir = TempDir::new().unwrap();
    let sources: Vec<(String, &str)> = (0..12)
        .map(|i| (format!("m{i:02}.py"), DUPLICATE_RAISE))
        .collect();
    for (name, source) in &sources {
        fs::write(dir.path().join(name), source).unwrap();
    }
    fs::write(
        dir.path().join(".codacyrc"),
        r#"{"tools":[{"name":"PyLint (Python 3)","patterns":[{"patternId":"E0711"}]}]}"#,
    )
    .unwrap();

    let results = run_tool(&dir.path().join(".codacyrc"), dir.path()).unwrap();
    assert_eq!(results.len(), 12);
    assert!(results.iter().all(|d| d.pattern_id == "E0711" && d.line == 1));
}
