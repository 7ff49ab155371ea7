//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use printstrip::cleaner::{Cleaner, discover};
use printstrip::config::Config;
use printstrip::output::{self, OutputMode};
use printstrip::strip::Strategy;

/// printstrip - strip debug logging from Dart sources
#[derive(Parser, Debug)]
#[command(
    name = "printstrip",
    version,
    about = "Strip print() and debugPrint() statements from Dart sources",
    long_about = "Walk a directory of .dart files and replace every print() and debugPrint()\n\
                  statement with a `// Debug logging removed` comment.\n\n\
                  The logging-utility file (app_logger.dart) is never modified."
)]
pub struct Cli {
    /// Directory to clean (defaults to the configured root, ruwaq_jawi/lib/core)
    pub root: Option<PathBuf>,

    /// Path substring of the logging-utility file to leave untouched
    #[arg(long, value_name = "NAME")]
    pub exclude: Option<String>,

    /// Use the original regex passes instead of the statement scanner
    #[arg(long)]
    pub legacy: bool,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Config file to read instead of ./.printstrip.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match &cli.config {
        Some(path) if !path.exists() => anyhow::bail!("config not found: {}", path.display()),
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    let root = cli.root.clone().unwrap_or_else(|| config.root.clone());
    let mut cleaner = Cleaner::from_config(&config).with_dry_run(cli.dry_run);
    if let Some(exclude) = &cli.exclude {
        cleaner = cleaner.with_exclude(exclude);
    }
    if cli.legacy {
        cleaner = cleaner.with_strategy(Strategy::Legacy);
    }

    let tasks = discover(&root).with_context(|| format!("cannot clean {}", root.display()))?;

    output::render_start(&root, output_mode);
    let summary =
        cleaner.process(&root, tasks, |outcome| outcome.render(output_mode, cli.dry_run));
    summary.render(output_mode);

    Ok(())
}
