//! Reading tables transcribed from the H.264 standard.
//!
//! Raw lines pass through [`normalize_line`] before one of the grammars in
//! [`grammar`] turns them into [`TableEntry`](lut_model::TableEntry) values.

pub mod grammar;
pub mod normalize;
pub mod source;

pub use grammar::{
    parse_cabac_init_line, parse_cavlc_line, parse_ctx_idx_inc_line, parse_range_tab_lps_line,
};
pub use normalize::{MISDECODED_MINUS, UNICODE_MINUS, normalize_line};
pub use source::{SourceLine, read_source_lines, source_lines};
