#![forbid(unsafe_code)]

//! JSONL serialization of diagnostic records
//!
//! One JSON object per diagnostic, newline-joined, in the order the
//! diagnostics were produced. Nothing else ever goes to this stream — the
//! consuming platform treats every stdout line as a record.

use crate::types::Diagnostic;

/// Serialize diagnostics as newline-joined JSON objects.
///
/// No trailing newline; the caller prints the block as one line-terminated
/// unit.
pub fn to_jsonl(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .filter_map(|d| serde_json::to_string(d).ok())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_object_per_line() {
        let diagnostics = vec![
            Diagnostic::new("a.py", "first", "E0711", 3),
            Diagnostic::new("b.py", "second", "C0111", 1),
        ];
        let out = to_jsonl(&diagnostics);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"filename":"a.py","line":3,"message":"first","patternId":"E0711"}"#
        );
        assert_eq!(
            lines[1],
            r#"{"filename":"b.py","line":1,"message":"second","patternId":"C0111"}"#
        );
    }

    #[test]
    fn test_empty_run_serializes_to_empty_string() {
        assert_eq!(to_jsonl(&[]), "");
    }

    #[test]
    fn test_lines_round_trip_as_json() {
        let diagnostics = vec![Diagnostic::new(
            "a.py",
            r#"Module name "W0124" doesn't conform to snake_case naming style"#,
            "C0103",
            1,
        )];
        let out = to_jsonl(&diagnostics);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["patternId"], "C0103");
        assert_eq!(value["line"], 1);
    }
}
