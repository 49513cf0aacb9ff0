//! Output side of the generator: literal renderers and the file writer.

pub mod render;
pub mod writer;

pub use render::{
    render_bit_literals, render_cabac_init, render_range_tab_lps, render_switch_cases,
    render_widths,
};
pub use writer::write_output;
