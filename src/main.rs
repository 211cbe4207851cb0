//! CLI entry point for reclist

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use reclist::{ListingFormatter, OutputConfig, TreeWalker, WalkerConfig, print_json};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

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
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "reclist")]
#[command(about = "Recursively list every file and directory beneath a path")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Do not descend into symlinked directories
    #[arg(short = 'P', long = "no-follow")]
    no_follow: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Print directory and file counts after the listing
    #[arg(short = 's', long = "summary", conflicts_with = "json")]
    summary: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Install the stderr log subscriber. RUST_LOG wins over -v.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let walker = TreeWalker::new(WalkerConfig {
        max_depth: args.level,
        follow_symlinks: !args.no_follow,
    });

    let report = walker.walk(&args.path);
    tracing::info!(
        root = %report.root().display(),
        entries = report.len(),
        unreadable = report.unreadable().len(),
        "walk finished"
    );

    let result = if args.json {
        print_json(&report)
    } else {
        let mut formatter = ListingFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
            summary: args.summary,
        });
        formatter.write_report(&report)
    };

    if let Err(e) = result {
        if e.is_broken_pipe() {
            return;
        }
        eprintln!("reclist: error writing output: {}", e);
        process::exit(1);
    }
}
