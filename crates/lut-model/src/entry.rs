//! Table entries produced by the line grammars.

use std::fmt;

/// Placeholder for a CAVLC cell that has no codeword.
pub const CAVLC_NOT_APPLICABLE: &str = "-";

/// A single literal value of a table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Source token kept verbatim.
    Text(String),
    /// Parsed integer, or the `0` sentinel for a missing trailing value.
    Int(i64),
}

impl Field {
    /// The value as it appears in rendered output.
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text(text) => f.write_str(text),
            Field::Int(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<i64> for Field {
    fn from(value: i64) -> Self {
        Field::Int(value)
    }
}

/// One logical row of a lookup table.
///
/// `index` is the position of the row in the target table and the only key
/// used for validation and ordering. Entries are never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    index: i64,
    fields: Vec<Field>,
}

impl TableEntry {
    pub fn new(index: i64, fields: Vec<Field>) -> Self {
        Self { index, fields }
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, position: usize) -> Option<&Field> {
        self.fields.get(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_display_matches_source() {
        assert_eq!(Field::from("-15").as_text(), "-15");
        assert_eq!(Field::Int(0).as_text(), "0");
        assert_eq!(Field::from("0011").as_text(), "0011");
    }

    #[test]
    fn entry_accessors() {
        let entry = TableEntry::new(4, vec![Field::Int(8), Field::Int(9)]);
        assert_eq!(entry.index(), 4);
        assert_eq!(entry.fields().len(), 2);
        assert_eq!(entry.field(1), Some(&Field::Int(9)));
        assert_eq!(entry.field(2), None);
    }
}
