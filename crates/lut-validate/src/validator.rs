//! Index checks run while a table is being parsed.
//!
//! A validator lives for exactly one pipeline run. Entries are checked one at
//! a time, as soon as their line has been parsed, so a duplicate is reported
//! against the line that introduced it rather than after the file is read.

use std::collections::BTreeMap;

use lut_model::{LutError, Result, TableEntry};
use tracing::{debug, trace};

#[derive(Debug, Default)]
pub struct EntryValidator {
    domain: Option<usize>,
    first_seen: BTreeMap<i64, usize>,
    entries: Vec<TableEntry>,
}

impl EntryValidator {
    /// `domain` is the size of the index range `0..domain` that must be fully
    /// covered, or `None` when the table has no completeness requirement.
    pub fn new(domain: Option<usize>) -> Self {
        Self {
            domain,
            first_seen: BTreeMap::new(),
            entries: Vec::new(),
        }
    }

    /// Check `entry` against everything observed so far, then record it.
    pub fn observe(&mut self, entry: TableEntry, line: usize) -> Result<()> {
        let index = entry.index();
        if let Some(&first_line) = self.first_seen.get(&index) {
            return Err(LutError::DuplicateIndex {
                index,
                line,
                first_line,
            });
        }
        if let Some(domain) = self.domain {
            if usize::try_from(index).map_or(true, |value| value >= domain) {
                return Err(LutError::IndexOutOfRange {
                    index,
                    line,
                    domain,
                });
            }
        }
        trace!(index, line, "entry accepted");
        self.first_seen.insert(index, line);
        self.entries.push(entry);
        Ok(())
    }

    /// Run the completeness check and hand back the entries in parse order.
    pub fn finish(self) -> Result<Vec<TableEntry>> {
        if let Some(domain) = self.domain {
            let mut expected = 0i64;
            for &index in self.first_seen.keys() {
                if index != expected {
                    return Err(LutError::MissingIndex { index: expected });
                }
                expected += 1;
            }
            if expected < domain as i64 {
                return Err(LutError::MissingIndex { index: expected });
            }
            debug!(domain, "index domain complete");
        }
        Ok(self.entries)
    }
}
