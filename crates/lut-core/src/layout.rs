//! One layout per generated table.
//!
//! A layout pairs the line grammar of a transcribed table with the renderer
//! for its literal form. The pipeline only talks to [`TableLayout`], so the
//! four tables share a single parse/validate/sort/render path.

use lut_ingest::{
    SourceLine, parse_cabac_init_line, parse_cavlc_line, parse_ctx_idx_inc_line,
    parse_range_tab_lps_line,
};
use lut_model::{CavlcMode, Result, TableEntry, TableKind};
use lut_report::{
    render_bit_literals, render_cabac_init, render_range_tab_lps, render_switch_cases,
    render_widths,
};

pub trait TableLayout {
    fn kind(&self) -> TableKind;

    /// Turn one normalized line into its logical entries.
    fn parse_line(&mut self, line: &SourceLine) -> Result<Vec<TableEntry>>;

    /// Render sorted entries.
    fn render(&self, entries: &[TableEntry]) -> String;

    /// Index range `0..n` that must be fully covered, if any.
    fn domain_size(&self) -> Option<usize> {
        self.kind().domain_size()
    }
}

#[derive(Debug, Default)]
pub struct CtxIdxIncLayout;

impl TableLayout for CtxIdxIncLayout {
    fn kind(&self) -> TableKind {
        TableKind::CtxIdxInc
    }

    fn parse_line(&mut self, line: &SourceLine) -> Result<Vec<TableEntry>> {
        parse_ctx_idx_inc_line(line)
    }

    fn render(&self, entries: &[TableEntry]) -> String {
        render_switch_cases(entries)
    }
}

#[derive(Debug, Default)]
pub struct CabacInitLayout;

impl TableLayout for CabacInitLayout {
    fn kind(&self) -> TableKind {
        TableKind::CabacInit
    }

    fn parse_line(&mut self, line: &SourceLine) -> Result<Vec<TableEntry>> {
        parse_cabac_init_line(line)
    }

    fn render(&self, entries: &[TableEntry]) -> String {
        render_cabac_init(entries)
    }
}

#[derive(Debug, Default)]
pub struct RangeTabLpsLayout;

impl TableLayout for RangeTabLpsLayout {
    fn kind(&self) -> TableKind {
        TableKind::RangeTabLps
    }

    fn parse_line(&mut self, line: &SourceLine) -> Result<Vec<TableEntry>> {
        parse_range_tab_lps_line(line)
    }

    fn render(&self, entries: &[TableEntry]) -> String {
        render_range_tab_lps(entries)
    }
}

/// CAVLC rows are numbered in file order since the table prints no index.
#[derive(Debug)]
pub struct CavlcLayout {
    mode: CavlcMode,
    next_row: i64,
}

impl CavlcLayout {
    pub fn new(mode: CavlcMode) -> Self {
        Self { mode, next_row: 0 }
    }
}

impl TableLayout for CavlcLayout {
    fn kind(&self) -> TableKind {
        TableKind::Cavlc
    }

    fn parse_line(&mut self, line: &SourceLine) -> Result<Vec<TableEntry>> {
        let entry = parse_cavlc_line(self.next_row, line)?;
        self.next_row += 1;
        Ok(vec![entry])
    }

    fn render(&self, entries: &[TableEntry]) -> String {
        match self.mode {
            CavlcMode::Lut => render_bit_literals(entries),
            CavlcMode::Sizes => render_widths(entries),
        }
    }
}

/// A fully specified generator: the table plus, for CAVLC, its output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSelection {
    CtxIdxInc,
    CabacInit,
    RangeTabLps,
    Cavlc(CavlcMode),
}

impl TableSelection {
    /// `mode` is only consulted for [`TableKind::Cavlc`].
    pub fn new(kind: TableKind, mode: CavlcMode) -> Self {
        match kind {
            TableKind::CtxIdxInc => TableSelection::CtxIdxInc,
            TableKind::CabacInit => TableSelection::CabacInit,
            TableKind::RangeTabLps => TableSelection::RangeTabLps,
            TableKind::Cavlc => TableSelection::Cavlc(mode),
        }
    }

    pub fn kind(self) -> TableKind {
        match self {
            TableSelection::CtxIdxInc => TableKind::CtxIdxInc,
            TableSelection::CabacInit => TableKind::CabacInit,
            TableSelection::RangeTabLps => TableKind::RangeTabLps,
            TableSelection::Cavlc(_) => TableKind::Cavlc,
        }
    }

    /// Fresh layout for a single run.
    pub fn layout(self) -> Box<dyn TableLayout> {
        match self {
            TableSelection::CtxIdxInc => Box::new(CtxIdxIncLayout),
            TableSelection::CabacInit => Box::new(CabacInitLayout),
            TableSelection::RangeTabLps => Box::new(RangeTabLpsLayout),
            TableSelection::Cavlc(mode) => Box::new(CavlcLayout::new(mode)),
        }
    }
}
