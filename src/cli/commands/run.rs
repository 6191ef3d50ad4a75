//! Full validation pipeline command

use crate::cli::logging::{log, LogLevel};
use crate::config::RunArgs;
use crate::dataset::ValidationFrame;
use crate::pipeline::ValidationPipeline;
use crate::scoring::DemoLoader;

use super::StorePaths;

pub fn run_pipeline(store: &StorePaths, args: RunArgs, log_level: LogLevel) -> Result<(), String> {
    let mut registry = store.registry();
    let runs = store.runs();

    let frame = ValidationFrame::from_json_file(&args.data)
        .map_err(|e| format!("Failed to load dataset: {e}"))?;

    let loader = match &args.feature {
        Some(feature) => DemoLoader::threshold(feature, args.cutoff),
        None => DemoLoader::mock(),
    };

    let mut pipeline = ValidationPipeline::new(&mut registry, &runs, &loader);
    let report = pipeline
        .run(&args.model, &frame)
        .map_err(|e| format!("Pipeline failed: {e}"))?;

    log(log_level, LogLevel::Normal, &format!("{report}"));

    // A rejected challenger exits non-zero so schedulers see the failure
    if report.promoted() {
        Ok(())
    } else {
        Err(format!("Model not ready for promotion, failing checks: {}", report.failing_tags.join(", ")))
    }
}
