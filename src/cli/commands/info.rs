//! Inspect a model's versions, tags, and aliases

use crate::cli::logging::{log, LogLevel};
use crate::config::{InfoArgs, OutputFormat};
use crate::registry::{Alias, ModelRegistry};

use super::StorePaths;

pub fn run_info(store: &StorePaths, args: InfoArgs, log_level: LogLevel) -> Result<(), String> {
    let registry = store.registry();

    let versions = registry
        .list_versions(&args.model)
        .map_err(|e| format!("Failed to list versions: {e}"))?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&versions)
                .map_err(|e| format!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Text => {
            let alias_of = |version: u64| -> Vec<&'static str> {
                [Alias::Challenger, Alias::Champion]
                    .iter()
                    .filter(|&&a| {
                        registry
                            .get_version_by_alias(&args.model, a)
                            .map(|mv| mv.version == version)
                            .unwrap_or(false)
                    })
                    .map(|a| a.as_str())
                    .collect()
            };

            log(log_level, LogLevel::Normal, &format!("Model: {}", args.model));
            for mv in &versions {
                let aliases = alias_of(mv.version);
                let aliases = if aliases.is_empty() {
                    String::new()
                } else {
                    format!(" @{}", aliases.join(" @"))
                };
                log(
                    log_level,
                    LogLevel::Normal,
                    &format!(
                        "  v{}{} run={} created={}",
                        mv.version,
                        aliases,
                        mv.run_id,
                        mv.created_at.format("%Y-%m-%d %H:%M:%S")
                    ),
                );
                if let Some(desc) = &mv.description {
                    log(log_level, LogLevel::Verbose, &format!("    description: {desc}"));
                }
                let mut tags: Vec<_> = mv.tags.iter().collect();
                tags.sort();
                for (key, value) in tags {
                    log(log_level, LogLevel::Normal, &format!("    {key} = {value}"));
                }
            }
        }
    }

    Ok(())
}
