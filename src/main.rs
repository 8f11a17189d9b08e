// src/main.rs
//
// reflowtext — re-wrap plain-text paragraphs to a row limit
//
// - Paragraphs (runs of non-blank lines) are joined, their space runs
//   collapsed, and re-wrapped greedily so each line plus its newline fits
//   the row limit.
// - Blank lines are kept as separators.
// - A line starting with a tab or four spaces begins verbatim content, copied
//   unchanged up to the next blank line (or just that line with
//   `--verbatim-runs per-line`).
// - Spaces inside ‹…› and «…» never become line breaks. A span longer than
//   the limit gets a line of its own.
// - Output always uses '\n' line endings.
//
// CLI flags:
//   -o, --output <OUT>    : file path or "stdout" (default)
//   -l, --row-limit <N>   : row limit in characters (default 80)
//   -i, --inplace         : overwrite the input file; disables --output
//   --verbatim-runs <P>   : coalesce (default) | per-line
//   -v, --verbose         : debug logging on stderr (RUST_LOG also honoured)

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use reflowtext::{wrap_str, VerbatimRuns, WrapConfig, DEFAULT_ROW_LIMIT};

const STDOUT: &str = "stdout";

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RunsArg {
    /// Indented line plus everything up to the next blank line
    Coalesce,
    /// Only the indented line itself
    PerLine,
}

impl From<RunsArg> for VerbatimRuns {
    fn from(arg: RunsArg) -> Self {
        match arg {
            RunsArg::Coalesce => VerbatimRuns::Coalesce,
            RunsArg::PerLine => VerbatimRuns::PerLine,
        }
    }
}

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Input file
    input: PathBuf,

    /// Output location; path to a file or 'stdout'
    #[arg(short, long, value_name = "OUT", default_value = STDOUT, conflicts_with = "inplace")]
    output: String,

    /// Row limit size in characters
    #[arg(
        short = 'l',
        long = "row-limit",
        visible_alias = "row_limit",
        value_name = "N",
        default_value_t = DEFAULT_ROW_LIMIT
    )]
    row_limit: usize,

    /// Make changes in-place; disables 'output' option
    #[arg(short, long, action = ArgAction::SetTrue)]
    inplace: bool,

    /// What an indent-marked line keeps verbatim
    #[arg(long, value_enum, value_name = "POLICY", default_value = "coalesce")]
    verbatim_runs: RunsArg,

    /// Debug logging on stderr
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Configuration problems abort before any input is read.
    let cfg = WrapConfig::builder()
        .row_limit(cli.row_limit)
        .verbatim_runs(cli.verbatim_runs.into())
        .inplace(cli.inplace)
        .build()
        .context("invalid configuration")?;

    let src = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    debug!("read {} byte(s) from {}", src.len(), cli.input.display());

    let out = wrap_str(&src, &cfg);

    if cfg.inplace() {
        fs::write(&cli.input, &out)
            .with_context(|| format!("failed to write {}", cli.input.display()))?;
        info!("rewrote {} in place", cli.input.display());
    } else if cli.output == STDOUT {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(out.as_bytes())
            .and_then(|()| stdout.flush())
            .context("failed to write to stdout")?;
    } else {
        fs::write(&cli.output, &out).with_context(|| format!("failed to write {}", cli.output))?;
        info!("wrote {}", cli.output);
    }
    Ok(())
}
