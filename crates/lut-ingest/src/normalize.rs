//! Canonical form of a transcribed line.

/// U+2212 MINUS SIGN, as copied from the H.264 standard PDF.
pub const UNICODE_MINUS: char = '\u{2212}';

/// The UTF-8 bytes of U+2212 decoded as Windows-1252 (`âˆ’`).
pub const MISDECODED_MINUS: &str = "\u{e2}\u{2c6}\u{2019}";

/// Replace both minus-sign variants with `-` and trim surrounding whitespace.
///
/// Returns `None` for lines that are blank after trimming.
pub fn normalize_line(raw: &str) -> Option<String> {
    let replaced = raw
        .replace(MISDECODED_MINUS, "-")
        .replace(UNICODE_MINUS, "-");
    let trimmed = replaced.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
