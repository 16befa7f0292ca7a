//! CLI entry point for zest

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::{ColorChoice, StandardStream};
use zest::output::DEFAULT_WIDTH;
use zest::{DisplayMode, OutputConfig, Walker};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "zest")]
#[command(about = "List directory contents in colored columns")]
#[command(version)]
struct Args {
    /// Directories to list (current directory if none given)
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Long format: one entry per line with permissions, ownership, size,
    /// and modification time
    #[arg(short = 'l', long = "long", conflicts_with = "across")]
    long: bool,

    /// Fill the grid left to right instead of down each column
    #[arg(short = 'x', long = "across")]
    across: bool,

    /// Recurse into subdirectories, printing a header per directory
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,

    /// Lay the grid out for COLS columns instead of the terminal width
    #[arg(short = 'w', long = "width", value_name = "COLS")]
    width: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Resolve the display width: explicit flag, then the terminal, then 80.
fn display_width(requested: Option<usize>) -> usize {
    requested
        .or_else(|| terminal_size::terminal_size().map(|(w, _)| w.0 as usize))
        .unwrap_or(DEFAULT_WIDTH)
}

fn main() {
    let args = Args::parse();

    let mode = if args.long {
        DisplayMode::Long
    } else if args.across {
        DisplayMode::Across
    } else {
        DisplayMode::Columns
    };

    let use_color = should_use_color(args.color);
    let config = OutputConfig {
        mode,
        use_color,
        width: display_width(args.width),
    };

    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let walker = Walker::new(config, args.recursive);
    // Listing failures were already reported per path; only a broken output
    // stream reaches here.
    if let Err(e) = walker.run(&args.paths, &mut stdout) {
        eprintln!("zest: error writing output: {}", e);
        process::exit(1);
    }
}
