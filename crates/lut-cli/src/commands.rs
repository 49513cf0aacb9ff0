use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use lut_cli::prompt::read_cavlc_mode;
use lut_core::{GeneratorConfig, RunReport, RunRequest, TableSelection, run_pipeline};
use lut_model::{CavlcMode, TableKind};

use crate::cli::GenerateArgs;
use crate::summary::print_tables;

const START_BANNER: &str = "Working...";
const SUCCESS_BANNER: &str = "SUCCESS!";

pub fn run_tables(config: &GeneratorConfig) -> Result<()> {
    print_tables(config);
    Ok(())
}

pub fn run_generate(args: &GenerateArgs, config: &GeneratorConfig) -> Result<RunReport> {
    let kind = TableKind::from(args.table);
    let mode = resolve_mode(kind, args, config)?;
    let request = RunRequest {
        selection: TableSelection::new(kind, mode),
        input: args.input.clone().unwrap_or_else(|| config.input_for(kind)),
        output: args.output.clone().unwrap_or_else(|| config.output_for(kind)),
        dry_run: args.dry_run,
    };
    debug!(?request, "resolved generator request");

    println!("{START_BANNER}");
    let report = run_pipeline(&request)
        .with_context(|| format!("generate {kind} from {}", request.input.display()))?;
    if report.output.is_none() {
        print!("{}", report.rendered);
    }
    println!("{SUCCESS_BANNER}");

    info!(entries = report.entries, lines = report.source_lines, "done");
    Ok(report)
}

/// Flag, then config, then an interactive prompt. Only CAVLC asks.
fn resolve_mode(
    kind: TableKind,
    args: &GenerateArgs,
    config: &GeneratorConfig,
) -> Result<CavlcMode> {
    if kind != TableKind::Cavlc {
        return Ok(CavlcMode::Lut);
    }
    if let Some(mode) = args.mode {
        return Ok(mode.into());
    }
    if let Some(mode) = config.cavlc_mode() {
        return Ok(mode);
    }
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mode = read_cavlc_mode(&mut stdin.lock(), &mut stdout)?;
    stdout.flush().context("flush stdout")?;
    Ok(mode)
}
