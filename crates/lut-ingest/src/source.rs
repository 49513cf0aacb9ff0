use std::fs;
use std::path::Path;

use lut_model::{LutError, Result};
use tracing::debug;

use crate::normalize::normalize_line;

/// A normalized, non-blank line with its 1-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Read the whole input file as raw lines, in file order.
pub fn read_source_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| LutError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<String> = contents.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "read source file");
    Ok(lines)
}

/// Normalize raw lines, dropping blanks but keeping source line numbers.
pub fn source_lines<S: AsRef<str>>(raw: &[S]) -> Vec<SourceLine> {
    raw.iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            normalize_line(line.as_ref()).map(|text| SourceLine {
                number: idx + 1,
                text,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_keep_numbering() {
        let lines = source_lines(&["1 2", "", "   ", "3 \u{2212}4"]);
        assert_eq!(
            lines,
            vec![
                SourceLine {
                    number: 1,
                    text: "1 2".to_string()
                },
                SourceLine {
                    number: 4,
                    text: "3 -4".to_string()
                },
            ]
        );
    }
}
