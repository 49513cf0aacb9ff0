//! Table generation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Read**: Load the transcribed table as raw lines
//! 2. **Parse**: Normalize each line and apply the table grammar
//! 3. **Validate**: Reject duplicate indices as entries arrive, then check
//!    completeness once
//! 4. **Sort**: Order entries by index
//! 5. **Render**: Produce the literal text in memory
//! 6. **Write**: Replace the output file with the rendered text
//!
//! Nothing is written unless every earlier stage succeeded.

use std::path::PathBuf;

use lut_ingest::{read_source_lines, source_lines};
use lut_model::{Result, TableEntry, TableKind};
use lut_report::write_output;
use lut_validate::EntryValidator;
use tracing::{debug, info, info_span};

use crate::layout::{TableLayout, TableSelection};

/// Inputs of a single generator run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub selection: TableSelection,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Render without touching the output file.
    pub dry_run: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub table: TableKind,
    pub input: PathBuf,
    /// Path written, `None` for dry runs.
    pub output: Option<PathBuf>,
    pub source_lines: usize,
    pub entries: usize,
    pub rendered: String,
}

/// Stable ascending order by index.
pub fn sort_entries(entries: &mut [TableEntry]) {
    entries.sort_by_key(TableEntry::index);
}

/// Parse, validate and sort raw lines.
pub fn collect_entries<S: AsRef<str>>(
    layout: &mut dyn TableLayout,
    raw_lines: &[S],
) -> Result<Vec<TableEntry>> {
    let mut validator = EntryValidator::new(layout.domain_size());
    let lines = source_lines(raw_lines);
    debug!(lines = lines.len(), "normalized source lines");

    for line in &lines {
        for entry in layout.parse_line(line)? {
            validator.observe(entry, line.number)?;
        }
    }

    let mut entries = validator.finish()?;
    sort_entries(&mut entries);
    Ok(entries)
}

/// Parse, validate, sort and render raw lines into literal text.
pub fn transform<S: AsRef<str>>(layout: &mut dyn TableLayout, raw_lines: &[S]) -> Result<String> {
    let entries = collect_entries(layout, raw_lines)?;
    Ok(layout.render(&entries))
}

/// Run one generator end to end.
pub fn run_pipeline(request: &RunRequest) -> Result<RunReport> {
    let table = request.selection.kind();
    let span = info_span!("generate", table = %table);
    let _guard = span.enter();

    let raw_lines = read_source_lines(&request.input)?;
    let mut layout = request.selection.layout();
    let entries = collect_entries(layout.as_mut(), &raw_lines)?;
    let rendered = layout.render(&entries);
    debug!(entries = entries.len(), bytes = rendered.len(), "rendered table");

    let output = if request.dry_run {
        None
    } else {
        write_output(&request.output, &rendered)?;
        Some(request.output.clone())
    };

    info!(
        input = %request.input.display(),
        entries = entries.len(),
        dry_run = request.dry_run,
        "table generated"
    );

    Ok(RunReport {
        table,
        input: request.input.clone(),
        output,
        source_lines: raw_lines.len(),
        entries: entries.len(),
        rendered,
    })
}
