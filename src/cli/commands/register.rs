//! Register a model version and its training-run metrics

use crate::cli::logging::{log, LogLevel};
use crate::config::RegisterArgs;
use crate::registry::{Alias, ModelRegistry};
use crate::tracking::{RunStore, TrainingRun};

use super::StorePaths;

pub fn run_register(store: &StorePaths, args: RegisterArgs, log_level: LogLevel) -> Result<(), String> {
    let mut registry = store.registry();
    let mut runs = store.runs();

    // Peek at the next version number so the default run ID matches
    let next_version = registry.list_versions(&args.model).map(|v| v.len() as u64 + 1).unwrap_or(1);
    let run_id =
        args.run_id.unwrap_or_else(|| format!("run-{}-v{next_version}", args.model));

    let mut run = TrainingRun::new(&run_id);
    run.metrics.insert("test_f1_score".to_string(), args.f1);
    runs.record_run(run).map_err(|e| format!("Failed to record run: {e}"))?;

    let version = registry
        .register_version(&args.model, args.description.as_deref(), &run_id)
        .map_err(|e| format!("Failed to register version: {e}"))?;

    log(
        log_level,
        LogLevel::Normal,
        &format!("Registered {} version {} (run {run_id})", args.model, version.version),
    );

    if args.as_challenger {
        registry
            .set_alias(&args.model, Alias::Challenger, version.version)
            .map_err(|e| format!("Failed to set alias: {e}"))?;
        log(
            log_level,
            LogLevel::Normal,
            &format!("Set @Challenger on {} version {}", args.model, version.version),
        );
    }

    Ok(())
}
