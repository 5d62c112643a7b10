//! Wall-clock bound for a whole analysis run
//!
//! The platform supplies the bound through the `TIMEOUT` environment variable
//! as `"<integer> <unit>"`. The bound is enforced by running the pipeline on
//! a supervised worker thread and waiting with a deadline, rather than with
//! an OS alarm signal: expiry is observed at subprocess-boundary granularity
//! and the process exits immediately, abandoning any in-flight subprocess.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Default bound when `TIMEOUT` is absent or unparseable: 16 minutes
pub const DEFAULT_TIMEOUT_SECS: u64 = 16 * 60;

/// Parse a `"<integer> <unit>"` duration string into seconds.
///
/// Unit is one of second(s), minute(s), hour(s). Any other shape — missing
/// parts, extra parts, a non-digit amount, an unrecognized unit — falls back
/// to [`DEFAULT_TIMEOUT_SECS`].
pub fn parse_timeout(raw: &str) -> u64 {
    let mut words = raw.split_whitespace();
    let (Some(amount), Some(unit), None) = (words.next(), words.next(), words.next()) else {
        return DEFAULT_TIMEOUT_SECS;
    };
    if !amount.chars().all(|c| c.is_ascii_digit()) {
        return DEFAULT_TIMEOUT_SECS;
    }
    let Ok(amount) = amount.parse::<u64>() else {
        return DEFAULT_TIMEOUT_SECS;
    };
    match unit {
        "second" | "seconds" => amount,
        "minute" | "minutes" => amount * 60,
        "hour" | "hours" => amount * 60 * 60,
        _ => DEFAULT_TIMEOUT_SECS,
    }
}

/// The run's time bound, read from the `TIMEOUT` environment variable
pub fn from_env() -> Duration {
    Duration::from_secs(parse_timeout(
        &std::env::var("TIMEOUT").unwrap_or_default(),
    ))
}

/// Run `job` on a worker thread, bounded by `limit`.
///
/// Returns `None` when the deadline expires before the job delivers a result.
/// The worker is abandoned on expiry — the caller is expected to exit the
/// process immediately, taking any in-flight subprocess down with it.
pub fn supervise<T, F>(limit: Duration, job: F) -> Option<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let worker = thread::Builder::new()
        .name("analysis".to_string())
        .spawn(move || {
            let _ = tx.send(job());
        });
    if worker.is_err() {
        return None;
    }
    rx.recv_timeout(limit).ok()
}
