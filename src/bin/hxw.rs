//! hxw - Hex viewer widget configuration tool
//!
//! Checks widget configurations and previews data through their columns.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hxw::{HexViewerState, ViewerConfig, render};
use tracing_subscriber::EnvFilter;

/// Hex viewer widget configuration tool
#[derive(Parser, Debug)]
#[command(name = "hxw")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a widget configuration and print the accepted state
    Check {
        /// Configuration file (JSON)
        config: PathBuf,

        /// Data file the cursor is checked against (default: sample data)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Render data through the configured columns
    Dump {
        /// Configuration file (JSON, default: built-in columns)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Maximum number of lines to print
        #[arg(short = 'n', long)]
        lines: Option<usize>,

        /// Print a header with the column names
        #[arg(long)]
        header: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Check { config, input } => cmd_check(&config, input.as_deref()),
        Command::Dump {
            config,
            input,
            lines,
            header,
        } => cmd_dump(config.as_deref(), input.as_deref(), lines, header),
    }
}

/// Read input from file or stdin
fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) => std::fs::read(p).with_context(|| format!("cannot read {}", p.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Load a config file and apply it to the state
fn configure(state: &mut HexViewerState, path: &Path) -> Result<()> {
    let config =
        ViewerConfig::load(path).with_context(|| format!("cannot load {}", path.display()))?;
    if config.is_empty() {
        tracing::warn!(path = %path.display(), "config sets no fields");
    }
    state
        .apply_config(&config)
        .with_context(|| format!("{} rejected", path.display()))
}

// === Commands ===

fn cmd_check(config: &Path, input: Option<&Path>) -> Result<()> {
    let mut state = match input {
        Some(p) => HexViewerState::with_data(read_input(Some(p))?),
        None => HexViewerState::new(),
    };
    configure(&mut state, config)?;

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

fn cmd_dump(config: Option<&Path>, input: Option<&Path>, lines: Option<usize>, header: bool) -> Result<()> {
    let mut state = HexViewerState::with_data(read_input(input)?);
    if let Some(path) = config {
        configure(&mut state, path)?;
    }

    if state.line_width() == 0 {
        bail!("line width is 0, nothing to render");
    }

    if header {
        let names: Vec<String> = state.columns().iter().map(|c| c.display_name()).collect();
        println!("# {}", names.join(" | "));
    }

    let total = render::line_count(state.data().len(), state.line_width());
    for line in 0..lines.map_or(total, |n| n.min(total)) {
        println!(
            "{}",
            render::format_line(state.columns(), state.data(), state.line_width(), line)
        );
    }

    Ok(())
}
