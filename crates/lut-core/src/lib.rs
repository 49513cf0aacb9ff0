//! Lookup-table generation pipeline.
//!
//! A run reads one transcribed table, parses every line with the grammar of
//! the selected [`TableLayout`], validates indices as entries arrive, sorts
//! them and renders the literal text in one piece.

pub mod config;
pub mod layout;
pub mod pipeline;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GeneratorConfig, TableConfig};
pub use layout::{
    CabacInitLayout, CavlcLayout, CtxIdxIncLayout, RangeTabLpsLayout, TableLayout, TableSelection,
};
pub use pipeline::{RunReport, RunRequest, collect_entries, run_pipeline, sort_entries, transform};
