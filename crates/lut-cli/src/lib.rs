//! CLI library components for the lookup-table generator.

pub mod logging;
pub mod prompt;
