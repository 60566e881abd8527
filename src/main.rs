//! CLI entry point for dirtree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirtree::{
    OutputConfig, Result, StreamingFormatter, StreamingWalker, TreeError, TreeWalker,
    WalkerConfig, print_json,
};
use tracing::debug;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    #[default]
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

/// Diagnostic verbosity on stderr
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print a directory's structure as a tree")]
#[command(version)]
struct Args {
    /// Directory to display
    path: PathBuf,

    /// Legacy second argument; any value other than -f lists directories only
    #[arg(value_name = "MODE", hide = true, allow_hyphen_values = true)]
    mode: Option<String>,

    /// Also list files, annotated with their size in bytes
    #[arg(short = 'f', long = "files")]
    files: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "never")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Diagnostics written to stderr: debug, info, warn, error, silent
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

impl Args {
    /// Whether files are listed. At most two arguments make up the legacy
    /// invocation `<path> [-f]`, so `-f` plus a second positional is misuse.
    fn include_files(&self) -> Result<bool> {
        match (&self.mode, self.files) {
            (Some(extra), true) => Err(TreeError::Usage(format!(
                "unexpected argument '{}': expected `dirtree <path> [-f]`",
                extra
            ))),
            (Some(_), false) => Ok(false),
            (None, files) => Ok(files),
        }
    }
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn run(args: &Args) -> Result<()> {
    let config = WalkerConfig {
        include_files: args.include_files()?,
    };

    if args.json {
        // JSON output requires full tree in memory (for serialization)
        let tree = TreeWalker::new(config).walk(&args.path)?;
        print_json(&tree)
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
        };
        let mut formatter = StreamingFormatter::stdout(output_config);
        StreamingWalker::new(config).walk_streaming(&args.path, &mut formatter)
    }
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("Parsed CLI arguments: {args:?}");

    if let Err(e) = run(&args) {
        eprintln!("dirtree: {}", e);
        process::exit(1);
    }
}
