//! Command-line argument definitions for `shelfmap`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;

/// Lay out picking-shelf bin contents from a JSON goals file.
///
/// Bins are ranked by sorted name and placed column by column on the shelf.
/// Prints one `row column slot item` line per slot.
#[derive(Debug, Parser)]
#[command(name = "shelfmap", version, about, long_about = None)]
pub struct Cli {
    /// Goals file with `bin_contents` and `work_order`.
    #[arg(default_value = "example.json")]
    pub goals: PathBuf,

    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// Output one JSON object per slot instead of text.
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Also print each work order entry with its shelf position and slot.
    #[arg(short = 'w', long)]
    pub work_order: bool,

    /// Also print the bin and approach poses of every occupied position.
    #[arg(short = 'p', long)]
    pub poses: bool,

    /// Rows per shelf column.
    #[arg(long, value_parser = parse_positive)]
    pub rows: Option<usize>,

    /// Item slots per shelf position.
    #[arg(short = 's', long, value_parser = parse_positive)]
    pub slots: Option<usize>,

    /// Text printed for an empty slot.
    #[arg(short = 'e', long)]
    pub empty_marker: Option<String>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum)]
    pub completions: Option<Shell>,

    /// Log debug details (bin placement, config resolution) to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

impl Cli {
    /// Write the completion script for `shell` to `out`.
    pub fn write_completions(shell: Shell, out: &mut dyn std::io::Write) {
        let mut cmd = Self::command();
        clap_complete::generate(shell, &mut cmd, "shelfmap", out);
    }
}

/// Parse a strictly positive count.
fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid count '{s}': expected a positive integer")),
    }
}
