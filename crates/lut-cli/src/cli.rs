//! CLI argument definitions for the lookup-table generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use lut_model::{CavlcMode, TableKind};

#[derive(Parser)]
#[command(
    name = "lutgen",
    version,
    about = "Generate H.264 entropy-coding lookup tables from transcribed standard tables",
    long_about = "Convert tables transcribed from the H.264 standard into source literals.\n\n\
                  Supports ctxIdxInc assignment, CABAC initialization values, rangeTabLPS\n\
                  and CAVLC coeff_token codewords."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Configuration file (default: ./lutgen.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate one lookup table.
    Generate(GenerateArgs),

    /// List the supported tables and their default paths.
    Tables,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Table to generate.
    #[arg(value_enum, value_name = "TABLE")]
    pub table: TableArg,

    /// Transcribed input table (default from config).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file, replaced on success (default from config).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// CAVLC output mode; prompts on stdin when neither this flag nor the
    /// config file provides one.
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    /// Print the rendered table to stdout instead of writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TableArg {
    #[value(name = "ctxidxinc")]
    CtxIdxInc,
    CabacInit,
    RangeTabLps,
    Cavlc,
}

impl From<TableArg> for TableKind {
    fn from(value: TableArg) -> Self {
        match value {
            TableArg::CtxIdxInc => TableKind::CtxIdxInc,
            TableArg::CabacInit => TableKind::CabacInit,
            TableArg::RangeTabLps => TableKind::RangeTabLps,
            TableArg::Cavlc => TableKind::Cavlc,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Lut,
    Sizes,
}

impl From<ModeArg> for CavlcMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Lut => CavlcMode::Lut,
            ModeArg::Sizes => CavlcMode::Sizes,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_with_mode() {
        let cli = Cli::try_parse_from([
            "lutgen",
            "generate",
            "cavlc",
            "--mode",
            "sizes",
            "--dry-run",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(TableKind::from(args.table), TableKind::Cavlc);
        assert!(matches!(args.mode, Some(ModeArg::Sizes)));
        assert!(args.dry_run);
    }

    #[test]
    fn table_names_match_model() {
        for (name, kind) in [
            ("ctxidxinc", TableKind::CtxIdxInc),
            ("cabac-init", TableKind::CabacInit),
            ("range-tab-lps", TableKind::RangeTabLps),
            ("cavlc", TableKind::Cavlc),
        ] {
            let cli = Cli::try_parse_from(["lutgen", "generate", name]).unwrap();
            let Command::Generate(args) = cli.command else {
                panic!("expected generate");
            };
            assert_eq!(TableKind::from(args.table), kind);
            assert_eq!(kind.name(), name);
        }
    }

    #[test]
    fn rejects_unknown_table() {
        assert!(Cli::try_parse_from(["lutgen", "generate", "cabac"]).is_err());
    }
}
