//! Ascender CLI
//!
//! Challenger validation and Champion promotion for model registries.
//!
//! # Usage
//!
//! ```bash
//! # Register a challenger with its training metrics
//! ascender register churn --f1 0.91 --description "..." --as-challenger
//!
//! # Run validation checks, writing result tags
//! ascender validate churn
//!
//! # Compare business value on a labeled dataset
//! ascender value churn --data validation.json --feature tenure --cutoff 12
//!
//! # Promote if all checks passed
//! ascender promote churn
//!
//! # Or run the whole pipeline in one shot
//! ascender run churn --data validation.json
//! ```

use ascender::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
