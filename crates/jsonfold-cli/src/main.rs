// Rust guideline compliant 2026-10-16

//! jsonfold CLI Application
//!
//! Command-line interface for merging layered JSON configuration files.

use clap::Parser;
use jsonfold_cli::config::{Config, Overrides};
use jsonfold_cli::error::CliError;
use jsonfold_cli::logging::init_tracing;
use jsonfold_cli::{commands, create_formatter, should_use_color};
use jsonfold_core::{ArrayStrategy, MergeOutcome, PathGuard};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "jsonfold",
    version,
    about = "jsonfold: merge layered JSON, JSONC and JSON5 files",
    long_about = "jsonfold deep-merges an ordered list of JSON, JSONC and JSON5 files into one output file. Later inputs override earlier ones. Every path stays inside the project root, and the output is only rewritten when its content would change.",
    after_help = "Examples:\n  jsonfold base.json env.jsonc local.json5 -o merged.json\n  jsonfold defaults.json overrides.json --skip-missing --backup\n  jsonfold a.json b.json --array-merge concat --indent 4\n  jsonfold --dry-run --json\n"
)]
struct Cli {
    /// Input files, lowest precedence first
    inputs: Vec<String>,

    /// Output file (default merged.json)
    #[arg(short, long)]
    output: Option<String>,

    /// Skip inputs that do not exist
    #[arg(long)]
    skip_missing: bool,

    /// Write minified output
    #[arg(long)]
    compact: bool,

    /// Show what would be written without writing
    #[arg(long)]
    dry_run: bool,

    /// Keep the previous output as <output>.bak
    #[arg(long)]
    backup: bool,

    /// Indent width (0 for minified, max 10)
    #[arg(long)]
    indent: Option<usize>,

    /// How arrays from later inputs combine with earlier ones
    #[arg(long, value_enum)]
    array_merge: Option<ArrayMerge>,

    /// Project root all paths are confined to (default: current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable JSON output
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    log_level: Option<String>,

    /// Write log lines as JSON
    #[arg(long)]
    log_json: bool,

    /// Hold an exclusive lock on <output>.lock while merging
    #[arg(long)]
    lock: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ArrayMerge {
    Replace,
    Concat,
}

impl From<ArrayMerge> for ArrayStrategy {
    fn from(value: ArrayMerge) -> Self {
        match value {
            ArrayMerge::Replace => ArrayStrategy::Replace,
            ArrayMerge::Concat => ArrayStrategy::Concat,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let root = match cli.root.clone() {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let display_root = PathGuard::new(&root)
        .map(|guard| guard.root().to_path_buf())
        .unwrap_or_else(|_| root.clone());

    let json = cli.json;
    let use_color = !cli.no_color && should_use_color();
    let formatter = create_formatter(json, use_color, &display_root);

    match run(cli, &root) {
        Ok(outcome) => {
            println!("{}", formatter.format_outcome(&outcome));
            Ok(ExitCode::SUCCESS)
        }
        Err(error) if json => {
            println!("{}", formatter.format_error(&error));
            Ok(ExitCode::FAILURE)
        }
        Err(error) => {
            eprintln!("{}", formatter.format_error(&error));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(cli: Cli, root: &Path) -> Result<MergeOutcome, CliError> {
    let overrides = Overrides {
        inputs: cli.inputs,
        output: cli.output,
        skip_missing: cli.skip_missing,
        compact: cli.compact,
        dry_run: cli.dry_run,
        backup: cli.backup,
        indent: cli.indent,
        array_merge: cli.array_merge.map(ArrayStrategy::from),
        log_level: cli.log_level,
        lock: cli.lock,
    };

    let config = Config::resolve(root, cli.config.as_deref(), overrides)?;
    init_tracing(&config.log_level, cli.log_json)?;
    tracing::debug!(root = %root.display(), ?config, "resolved configuration");

    commands::merge::execute(&config, root)
}
