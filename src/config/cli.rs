//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Ascender: Challenger/Champion Promotion Gates
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "ascender")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Challenger validation checks and Champion promotion gates for model registries")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Store directory holding the registry and run records
    #[arg(short, long, global = true, default_value = ".ascender")]
    pub store: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a model version and its training-run metrics
    Register(RegisterArgs),

    /// Run validation checks on the Challenger, writing result tags
    Validate(ValidateArgs),

    /// Business-value simulation on a labeled validation dataset
    Value(ValueArgs),

    /// Promote the Challenger to Champion if all checks passed
    Promote(PromoteArgs),

    /// Full pipeline: validate, simulate value, promote
    Run(RunArgs),

    /// Show a model's versions, tags, and aliases
    Info(InfoArgs),
}

/// Arguments for the register command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RegisterArgs {
    /// Registered model name
    #[arg(value_name = "MODEL")]
    pub model: String,

    /// Free-text model description
    #[arg(short, long)]
    pub description: Option<String>,

    /// F1 score on the held-out test set, recorded on the training run
    #[arg(long)]
    pub f1: f64,

    /// Training run ID (defaults to run-<model>-v<version>)
    #[arg(long)]
    pub run_id: Option<String>,

    /// Set the @Challenger alias on the new version
    #[arg(long)]
    pub as_challenger: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Registered model name
    #[arg(value_name = "MODEL")]
    pub model: String,

    /// Minimum description length (exclusive)
    #[arg(long, default_value_t = 20)]
    pub min_description_len: usize,

    /// Training-run metric compared against the Champion
    #[arg(long, default_value = "test_f1_score")]
    pub metric: String,
}

/// Arguments for the value command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValueArgs {
    /// Registered model name
    #[arg(value_name = "MODEL")]
    pub model: String,

    /// Labeled validation dataset (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,

    /// Feature the demo threshold model splits on (omit to use mock
    /// predictions, as on an incompatible runtime)
    #[arg(long)]
    pub feature: Option<String>,

    /// Decision threshold for the demo model
    #[arg(long, default_value_t = 0.5)]
    pub cutoff: f64,
}

/// Arguments for the promote command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PromoteArgs {
    /// Registered model name
    #[arg(value_name = "MODEL")]
    pub model: String,
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Registered model name
    #[arg(value_name = "MODEL")]
    pub model: String,

    /// Labeled validation dataset (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,

    /// Feature the demo threshold model splits on
    #[arg(long)]
    pub feature: Option<String>,

    /// Decision threshold for the demo model
    #[arg(long, default_value_t = 0.5)]
    pub cutoff: f64,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Registered model name
    #[arg(value_name = "MODEL")]
    pub model: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for inspection commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables
    Text,
    /// Machine-readable JSON
    Json,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
