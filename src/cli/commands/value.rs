//! Business-value simulation command

use crate::cli::logging::{log, LogLevel};
use crate::config::ValueArgs;
use crate::dataset::ValidationFrame;
use crate::pipeline::ValidationPipeline;
use crate::scoring::DemoLoader;

use super::StorePaths;

pub fn run_value(store: &StorePaths, args: ValueArgs, log_level: LogLevel) -> Result<(), String> {
    let mut registry = store.registry();
    let runs = store.runs();

    let frame = ValidationFrame::from_json_file(&args.data)
        .map_err(|e| format!("Failed to load dataset: {e}"))?;

    let loader = match &args.feature {
        Some(feature) => DemoLoader::threshold(feature, args.cutoff),
        None => DemoLoader::mock(),
    };
    if args.feature.is_none() {
        log(
            log_level,
            LogLevel::Verbose,
            "No demo model configured, scoring with mock predictions",
        );
    }

    let pipeline = ValidationPipeline::new(&mut registry, &runs, &loader);
    let (challenger, champion, champion_exists) = pipeline
        .simulate_value(&args.model, &frame)
        .map_err(|e| format!("Simulation failed: {e}"))?;

    log(log_level, LogLevel::Normal, "Business metrics - revenue impacted (validate split):");
    log(log_level, LogLevel::Normal, &format!("  Challenger {challenger:>12.0}"));
    if champion_exists {
        log(log_level, LogLevel::Normal, &format!("  Champion   {champion:>12.0}"));
    } else {
        log(log_level, LogLevel::Normal, "  Champion          (none registered)");
    }

    Ok(())
}
