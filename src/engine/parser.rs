//! Normalization of Pylint's parseable report into diagnostic records
//!
//! The report grammar is a versioned contract with the external tool: one
//! diagnostic per line, `path:line: [<id>(<symbol>), <obj>] <message>`. All
//! pattern matching against it lives in this module, so a format change in a
//! future Pylint release is a one-file fix.
//!
//! Lines that do not split into exactly three colon-separated segments
//! (banners, module headers, summary tables) are discarded. A three-segment
//! line whose message field does not match the bracketed shape is a hard
//! failure that aborts the whole run — no partial results are emitted.

use crate::error::ParseError;
use crate::types::Diagnostic;
use regex::Regex;
use std::sync::OnceLock;

fn message_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\[([^(]+)\(.*?\] (.+)").expect("hard-coded pattern compiles")
    })
}

/// Extract the rule identifier and the human-readable text from the message
/// segment of a report line.
pub fn parse_message(message: &str) -> Result<(&str, &str), ParseError> {
    let caps = message_pattern()
        .captures(message)
        .ok_or_else(|| ParseError::MalformedMessage(message.to_string()))?;
    // Groups 1 and 2 are non-optional in the pattern.
    match (caps.get(1), caps.get(2)) {
        (Some(id), Some(text)) => Ok((id.as_str(), text.as_str())),
        _ => Err(ParseError::MalformedMessage(message.to_string())),
    }
}

/// Parse a raw Pylint report into diagnostic records, in report order.
pub fn parse_report(report: &str) -> Result<Vec<Diagnostic>, ParseError> {
    let mut diagnostics = Vec::new();
    for line in report.lines() {
        let segments: Vec<&str> = line.split(':').map(str::trim).collect();
        let [path, line_no, message] = segments[..] else {
            continue;
        };
        let (pattern_id, text) = parse_message(message)?;
        let line_no: u32 = line_no.parse().map_err(|_| ParseError::InvalidLineNumber {
            segment: line_no.to_string(),
            line: line.to_string(),
        })?;
        diagnostics.push(Diagnostic::new(path, text, pattern_id, line_no));
    }
    Ok(diagnostics)
}
