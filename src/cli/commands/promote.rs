//! Promote the Challenger to Champion

use crate::cli::logging::{log, LogLevel};
use crate::config::PromoteArgs;
use crate::gate::PromotionGate;

use super::StorePaths;

pub fn run_promote(store: &StorePaths, args: PromoteArgs, log_level: LogLevel) -> Result<(), String> {
    let mut registry = store.registry();

    let gate = PromotionGate::default();
    gate.promote(&mut registry, &args.model)
        .map_err(|e| format!("Model not promoted: {e}"))?;

    log(
        log_level,
        LogLevel::Normal,
        &format!("Registered {} Challenger as Champion", args.model),
    );
    Ok(())
}
