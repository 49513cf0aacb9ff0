//! Error taxonomy shared by every pipeline stage.
//!
//! Each variant carries the structured values needed to point at the
//! offending source line, so callers can branch on the kind instead of
//! matching message text.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LutError {
    /// Line does not match the grammar of the table being generated.
    #[error("malformed line {line_number}: {reason}: {line:?}")]
    MalformedLine {
        line_number: usize,
        line: String,
        reason: String,
    },

    /// Same index declared twice.
    #[error("duplicate index {index} on line {line} (first seen on line {first_line})")]
    DuplicateIndex {
        index: i64,
        line: usize,
        first_line: usize,
    },

    /// Completeness check found a gap in the index domain.
    #[error("missing index {index}")]
    MissingIndex { index: i64 },

    /// Index lies outside the declared domain of the table.
    #[error("index {index} on line {line} is outside 0..{domain}")]
    IndexOutOfRange {
        index: i64,
        line: usize,
        domain: usize,
    },

    /// Interactive selector answered with something other than `1` or `2`.
    #[error("invalid choice {input:?}, expected 1 or 2")]
    InvalidChoice { input: String },

    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LutError {
    pub fn malformed(line_number: usize, line: &str, reason: impl Into<String>) -> Self {
        LutError::MalformedLine {
            line_number,
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_names_both_lines() {
        let err = LutError::DuplicateIndex {
            index: 7,
            line: 12,
            first_line: 3,
        };
        assert_eq!(
            err.to_string(),
            "duplicate index 7 on line 12 (first seen on line 3)"
        );
    }

    #[test]
    fn malformed_keeps_raw_line() {
        let err = LutError::malformed(2, "1 2 x", "expected 8 tokens, found 3");
        match err {
            LutError::MalformedLine {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "1 2 x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
