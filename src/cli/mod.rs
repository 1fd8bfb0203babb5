//! CLI module for rng-analyzer
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `analyze` - Upload a .bin file to the classification service
//! - `history` - Show or clear past analyses (list, clear)
//! - `classes` - Describe the known prediction classes
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Analyze a capture against a local service
//! rng-analyzer analyze capture.bin --endpoint http://localhost:8000/predict_bin/
//!
//! # Show stored results as JSON
//! rng-analyzer history list --json
//! ```

pub mod analyze;
pub mod classes;
pub mod completions;
pub mod config;
pub mod history;
pub mod output;

pub use completions::handle_completions;
pub use config::handle_config_init;

use crate::config::AnalyzerConfig;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "rng-analyzer.toml";

/// rng-analyzer - RNG output health checks
#[derive(Parser, Debug)]
#[command(
    name = "rng-analyzer",
    version,
    about = "Classify random-number-generator output with a remote service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a binary file
    Analyze(AnalyzeArgs),
    /// Show or clear analysis history
    #[command(subcommand)]
    History(HistoryCommands),
    /// List known prediction classes
    Classes(ClassesArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by commands that read configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the history data directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RNG_ANALYZER_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Binary file to analyze
    pub file: PathBuf,

    /// Declared content type (guessed from the extension if omitted)
    #[arg(short, long)]
    pub mime_type: Option<String>,

    /// Override the classification endpoint
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Override the request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not record the result in history
    #[arg(long)]
    pub no_save: bool,

    /// Accept files without a .bin extension
    #[arg(long)]
    pub allow_any_extension: bool,

    #[command(flatten)]
    pub common: ConfigArgs,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List stored analyses, most recent first
    List(HistoryListArgs),
    /// Delete all stored analyses
    Clear(HistoryClearArgs),
}

#[derive(Args, Debug)]
pub struct HistoryListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: ConfigArgs,
}

#[derive(Args, Debug)]
pub struct HistoryClearArgs {
    /// Confirm deletion
    #[arg(short, long)]
    pub yes: bool,

    #[command(flatten)]
    pub common: ConfigArgs,
}

#[derive(Args, Debug)]
pub struct ClassesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,

    /// Classification endpoint to write instead of the public service
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// History directory to write instead of the platform default
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Load configuration with environment and CLI overrides
///
/// An explicit `--config` must exist; the default file is optional.
pub fn load_config(args: &ConfigArgs) -> Result<AnalyzerConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::load(Some(path))?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            AnalyzerConfig::load(Some(Path::new(DEFAULT_CONFIG_FILE)))?
        }
        None => AnalyzerConfig::default(),
    };

    config = config.with_env_overrides();

    if let Some(ref dir) = args.data_dir {
        config.history.data_dir = dir.clone();
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }

    Ok(config)
}
