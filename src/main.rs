//! Adapter CLI entry point

use clap::Parser;
use codacy_pylint::{engine, output, timeout};
use std::path::PathBuf;
use std::process;

/// Exit codes of the platform contract
const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_TIMEOUT: i32 = 2;

/// Codacy adapter that runs Pylint and emits newline-delimited JSON diagnostics
#[derive(Parser, Debug)]
#[command(name = "codacy-pylint")]
#[command(about = "Runs Pylint over a source tree and emits JSON diagnostics")]
#[command(version)]
struct Cli {
    /// Path of the platform configuration document
    #[arg(long, default_value = "/.codacyrc")]
    codacyrc: PathBuf,

    /// Root of the source tree to analyze
    #[arg(long, default_value = "/src")]
    src: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let limit = timeout::from_env();

    let outcome = timeout::supervise(limit, move || engine::run_tool(&cli.codacyrc, &cli.src));

    let code = match outcome {
        Some(Ok(results)) => {
            println!("{}", output::to_jsonl(&results));
            EXIT_SUCCESS
        }
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
        None => EXIT_TIMEOUT,
    };
    process::exit(code);
}
