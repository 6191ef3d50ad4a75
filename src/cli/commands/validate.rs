//! Run validation checks on the Challenger

use crate::checks::ValidationSuite;
use crate::cli::logging::{log, LogLevel};
use crate::config::ValidateArgs;
use crate::registry::{Alias, ModelRegistry};

use super::StorePaths;

pub fn run_validate(store: &StorePaths, args: ValidateArgs, log_level: LogLevel) -> Result<(), String> {
    let mut registry = store.registry();
    let runs = store.runs();

    let challenger = registry
        .get_version_by_alias(&args.model, Alias::Challenger)
        .map_err(|e| format!("Failed to resolve challenger: {e}"))?;

    log(
        log_level,
        LogLevel::Normal,
        &format!(
            "Validating Challenger model for {} on model version {}",
            args.model, challenger.version
        ),
    );

    let suite = ValidationSuite {
        min_description_len: args.min_description_len,
        metric_name: args.metric.clone(),
    };

    let outcomes = suite
        .run(&mut registry, &runs, &args.model)
        .map_err(|e| format!("Validation failed: {e}"))?;

    for outcome in &outcomes {
        let status = if outcome.passed { "PASS" } else { "FAIL" };
        log(log_level, LogLevel::Normal, &format!("[{status}] {}: {}", outcome.key, outcome.detail));
    }

    Ok(())
}
