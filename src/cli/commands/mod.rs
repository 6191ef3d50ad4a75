//! CLI command implementations

mod info;
mod promote;
mod register;
mod run;
mod validate;
mod value;


use std::path::{Path, PathBuf};

use crate::cli::LogLevel;
use crate::config::{Cli, Command};
use crate::registry::JsonFileRegistry;
use crate::tracking::JsonFileRunStore;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure output based on verbose/quiet flags
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    let store = StorePaths::new(&cli.store);

    match cli.command {
        Command::Register(args) => register::run_register(&store, args, log_level),
        Command::Validate(args) => validate::run_validate(&store, args, log_level),
        Command::Value(args) => value::run_value(&store, args, log_level),
        Command::Promote(args) => promote::run_promote(&store, args, log_level),
        Command::Run(args) => run::run_pipeline(&store, args, log_level),
        Command::Info(args) => info::run_info(&store, args, log_level),
    }
}

/// Layout of the on-disk store: registry documents and run records live
/// in sibling subdirectories.
pub(crate) struct StorePaths {
    root: PathBuf,
}

impl StorePaths {
    pub(crate) fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }

    pub(crate) fn registry(&self) -> JsonFileRegistry {
        JsonFileRegistry::new(self.root.join("registry"))
    }

    pub(crate) fn runs(&self) -> JsonFileRunStore {
        JsonFileRunStore::new(self.root.join("runs"))
    }
}
