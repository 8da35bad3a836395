use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use shelfmap::cli::{Cli, ColorMode};
use shelfmap::config::Config;
use shelfmap::formatter::{format_pose, format_slot, format_target};
use shelfmap::{Goals, ShelfError, ShelfGrid, WorkTarget, logger};

fn main() -> ExitCode {
    // Reset SIGPIPE so `shelfmap | head` ends quietly.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        Cli::write_completions(shell, &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    logger::init(cli.verbose);

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("shelfmap: {e}");
            return ExitCode::from(1);
        }
    };

    let use_color = resolve_color_mode(config.color_mode);

    let (grid, targets) = match load(&cli.goals, &config) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("shelfmap: {e}");
            return ExitCode::from(1);
        }
    };

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let result = write_report(&mut writer, &grid, &targets, &config, use_color)
        .and_then(|()| writer.flush());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shelfmap: write error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Read the goals file and lay it out. The work order is resolved only when
/// it will be printed.
fn load(path: &Path, config: &Config) -> Result<(ShelfGrid, Vec<WorkTarget>), ShelfError> {
    let goals = Goals::from_path(path)?;
    tracing::debug!(
        path = %path.display(),
        bins = goals.bin_contents.len(),
        "loaded goals"
    );

    let grid = ShelfGrid::from_goals(&goals, &config.layout)?;
    let targets = if config.show_work_order {
        goals.resolve_work_order(&config.layout)?
    } else {
        Vec::new()
    };
    Ok((grid, targets))
}

fn write_report<W: Write>(
    writer: &mut W,
    grid: &ShelfGrid,
    targets: &[WorkTarget],
    config: &Config,
    use_color: bool,
) -> io::Result<()> {
    let mut line_buf = String::new();

    for entry in grid.slots() {
        line_buf.clear();
        format_slot(&entry, config, use_color, &mut line_buf);
        writeln!(writer, "{line_buf}")?;
    }

    if config.show_work_order {
        if !config.json_output {
            writeln!(writer)?;
        }
        for target in targets {
            line_buf.clear();
            format_target(target, config, use_color, &mut line_buf);
            writeln!(writer, "{line_buf}")?;
        }
    }

    if config.show_poses {
        if !config.json_output {
            writeln!(writer)?;
        }
        for (rank, bin) in grid.bins().iter().enumerate() {
            line_buf.clear();
            format_pose(bin, config.layout.position(rank), config, use_color, &mut line_buf);
            writeln!(writer, "{line_buf}")?;
        }
    }

    Ok(())
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            let stdout = io::stdout();
            if !stdout.is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            true
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// Rust ignores SIGPIPE by default, which would surface as a `BrokenPipe`
/// error when the reader of stdout goes away early.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
