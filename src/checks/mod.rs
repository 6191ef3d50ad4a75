//! Challenger validation checks
//!
//! A fixed sequence of independent checks run against the version holding
//! `@Challenger`. Each produces a pass/fail outcome and is recorded as a
//! tag on the model version (`"True"`/`"False"`, the capitalized form the
//! promotion gate reads back). Re-running the suite overwrites prior tag
//! values.
//!
//! Checks:
//! - **Description**: the version carries a description longer than a
//!   minimum length.
//! - **Metric**: the challenger's `test_f1_score` is at least the current
//!   champion's. A missing champion is expected absence, not an error:
//!   the first model is always admitted.


use thiserror::Error;

use crate::registry::{Alias, ModelRegistry, ModelVersion, RegistryError};
use crate::tracking::{RunStore, RunStoreError};

/// Tag key recording the description check.
pub const TAG_HAS_DESCRIPTION: &str = "has_description";

/// Tag key recording the metric comparison check.
pub const TAG_METRIC_F1_PASSED: &str = "metric_f1_passed";

/// Tag value written for a check result.
///
/// The wire format is the capitalized literal `"True"`/`"False"`; the
/// gate compares against `"True"` exactly.
#[must_use]
pub fn tag_value(passed: bool) -> &'static str {
    if passed {
        "True"
    } else {
        "False"
    }
}

/// Result of one validation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Tag key this check writes
    pub key: &'static str,
    /// Whether the check passed
    pub passed: bool,
    /// Human-readable explanation
    pub detail: String,
}

/// Errors from running the validation suite.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("run store error: {0}")]
    RunStore(#[from] RunStoreError),
}

/// Result type for suite operations.
pub type Result<T> = std::result::Result<T, SuiteError>;

/// The challenger validation suite.
#[derive(Debug, Clone)]
pub struct ValidationSuite {
    /// Minimum description length (exclusive) for the description check
    pub min_description_len: usize,
    /// Metric name compared between challenger and champion
    pub metric_name: String,
}

impl Default for ValidationSuite {
    fn default() -> Self {
        Self { min_description_len: 20, metric_name: "test_f1_score".to_string() }
    }
}

impl ValidationSuite {
    /// Description check: passes iff the description is present and
    /// strictly longer than `min_description_len` characters.
    pub fn check_description(&self, version: &ModelVersion) -> CheckOutcome {
        let (passed, detail) = match version.description.as_deref() {
            None | Some("") => (false, "no description provided".to_string()),
            Some(desc) if desc.len() <= self.min_description_len => (
                false,
                format!(
                    "description too short ({} chars, minimum {})",
                    desc.len(),
                    self.min_description_len + 1
                ),
            ),
            Some(desc) => (true, format!("description present ({} chars)", desc.len())),
        };
        CheckOutcome { key: TAG_HAS_DESCRIPTION, passed, detail }
    }

    /// Metric comparison check: challenger metric must be >= the current
    /// champion's (equal passes). With no champion registered, the
    /// challenger passes unconditionally.
    pub fn check_metric(
        &self,
        registry: &dyn ModelRegistry,
        runs: &dyn RunStore,
        challenger: &ModelVersion,
    ) -> Result<CheckOutcome> {
        let challenger_score = runs.get_metric(&challenger.run_id, &self.metric_name)?;

        let (passed, detail) = match registry.get_version_by_alias(&challenger.name, Alias::Champion)
        {
            Ok(champion) => {
                let champion_score = runs.get_metric(&champion.run_id, &self.metric_name)?;
                (
                    challenger_score >= champion_score,
                    format!(
                        "champion {}: {champion_score}, challenger: {challenger_score}",
                        self.metric_name
                    ),
                )
            }
            Err(RegistryError::AliasNotFound { .. }) => {
                (true, "no champion found, accepting the first model".to_string())
            }
            Err(e) => return Err(e.into()),
        };

        Ok(CheckOutcome { key: TAG_METRIC_F1_PASSED, passed, detail })
    }

    /// Run all checks against the model's challenger version, writing each
    /// outcome as a tag on the version.
    pub fn run(
        &self,
        registry: &mut dyn ModelRegistry,
        runs: &dyn RunStore,
        model_name: &str,
    ) -> Result<Vec<CheckOutcome>> {
        let challenger = registry.get_version_by_alias(model_name, Alias::Challenger)?;

        let outcomes =
            vec![self.check_description(&challenger), self.check_metric(registry, runs, &challenger)?];

        for outcome in &outcomes {
            registry.set_version_tag(
                model_name,
                challenger.version,
                outcome.key,
                tag_value(outcome.passed),
            )?;
        }

        Ok(outcomes)
    }
}
