//! End-to-end challenger validation pipeline
//!
//! Runs the full sequence on demand: challenger lookup, validation checks
//! (tags written to the registry), the business-value simulation, and the
//! promotion gate. Control flows strictly top to bottom; the gate is the
//! only decision point.
//!
//! The business-value comparison is informational only and never feeds the
//! promotion decision.

#[cfg(test)]
mod tests;

use std::fmt;

use thiserror::Error;

use crate::checks::{CheckOutcome, SuiteError, ValidationSuite};
use crate::dataset::ValidationFrame;
use crate::eval::{business_value, BinaryConfusionMatrix, CostTable};
use crate::gate::{GateError, GateState, PromotionGate};
use crate::registry::{Alias, ModelRegistry, RegistryError};
use crate::scoring::{model_uri, score_with_fallback, LoadError, ModelLoader};
use crate::tracking::RunStore;

/// Errors aborting a pipeline run.
///
/// Gate rejection is not among them: a rejected challenger is a normal
/// outcome, reported in the [`ValidationReport`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("validation suite failed: {0}")]
    Suite(#[from] SuiteError),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("model load failed: {0}")]
    Load(#[from] LoadError),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Outcome of a full pipeline run.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Model under validation
    pub model_name: String,
    /// Challenger version number
    pub version: u64,
    /// Check outcomes in execution order
    pub outcomes: Vec<CheckOutcome>,
    /// Estimated dollar value of the challenger on the validation split
    pub challenger_value: f64,
    /// Estimated dollar value of the champion (0.0 when none exists)
    pub champion_value: f64,
    /// Whether a champion existed at simulation time
    pub champion_exists: bool,
    /// Final gate state
    pub state: GateState,
    /// Tag keys that failed the gate (empty when promoted)
    pub failing_tags: Vec<String>,
}

impl ValidationReport {
    /// Whether the challenger was promoted.
    #[must_use]
    pub fn promoted(&self) -> bool {
        self.state == GateState::Promoted
    }
}

/// Proportional text bar for the revenue chart.
fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "#".repeat(filled.min(width))
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation report: {} version {}", self.model_name, self.version)?;
        writeln!(f, "{}", "-".repeat(54))?;
        for outcome in &self.outcomes {
            let status = if outcome.passed { "PASS" } else { "FAIL" };
            writeln!(f, "  [{status}] {:<20} {}", outcome.key, outcome.detail)?;
        }

        writeln!(f, "\nBusiness metrics - revenue impacted (validate split):")?;
        let max = self.challenger_value.max(self.champion_value);
        writeln!(
            f,
            "  Challenger {:<40} {:>10.0}",
            bar(self.challenger_value, max, 40),
            self.challenger_value
        )?;
        if self.champion_exists {
            writeln!(
                f,
                "  Champion   {:<40} {:>10.0}",
                bar(self.champion_value, max, 40),
                self.champion_value
            )?;
        } else {
            writeln!(f, "  Champion   {:<40} {:>10.0}  (none registered)", "", 0.0)?;
        }

        write!(f, "\nDecision: {}", self.state)?;
        if !self.failing_tags.is_empty() {
            write!(f, " (failing: {})", self.failing_tags.join(", "))?;
        }
        Ok(())
    }
}

/// The challenger validation pipeline.
pub struct ValidationPipeline<'a> {
    registry: &'a mut dyn ModelRegistry,
    runs: &'a dyn RunStore,
    loader: &'a dyn ModelLoader,
    suite: ValidationSuite,
    gate: PromotionGate,
    costs: CostTable,
}

impl<'a> ValidationPipeline<'a> {
    /// Build a pipeline over the given collaborators with default suite,
    /// gate, and cost table.
    pub fn new(
        registry: &'a mut dyn ModelRegistry,
        runs: &'a dyn RunStore,
        loader: &'a dyn ModelLoader,
    ) -> Self {
        Self {
            registry,
            runs,
            loader,
            suite: ValidationSuite::default(),
            gate: PromotionGate::default(),
            costs: CostTable::churn_default(),
        }
    }

    /// Replace the default cost table.
    #[must_use]
    pub fn with_costs(mut self, costs: CostTable) -> Self {
        self.costs = costs;
        self
    }

    /// Replace the default validation suite.
    #[must_use]
    pub fn with_suite(mut self, suite: ValidationSuite) -> Self {
        self.suite = suite;
        self
    }

    /// Score one aliased model on the frame and estimate its dollar value.
    fn value_for_alias(
        &self,
        model_name: &str,
        alias: Alias,
        frame: &ValidationFrame,
    ) -> Result<f64> {
        let uri = model_uri(model_name, alias.as_str());
        let predictions = score_with_fallback(self.loader, &uri, frame)?;
        let cm = BinaryConfusionMatrix::from_labels(&frame.labels(), &predictions);
        Ok(business_value(&cm, &self.costs))
    }

    /// Run the business-value simulation for challenger and champion.
    ///
    /// Returns (challenger value, champion value, champion exists). A
    /// missing champion contributes 0.0, mirroring the first-deployment
    /// case.
    pub fn simulate_value(
        &self,
        model_name: &str,
        frame: &ValidationFrame,
    ) -> Result<(f64, f64, bool)> {
        let validate = frame.filter_split("validate");

        let challenger_value = self.value_for_alias(model_name, Alias::Challenger, &validate)?;

        let (champion_value, champion_exists) =
            match self.registry.get_version_by_alias(model_name, Alias::Champion) {
                Ok(_) => (self.value_for_alias(model_name, Alias::Champion, &validate)?, true),
                Err(RegistryError::AliasNotFound { .. }) => (0.0, false),
                Err(e) => return Err(e.into()),
            };

        Ok((challenger_value, champion_value, champion_exists))
    }

    /// Execute the full pipeline: checks, value simulation, gate.
    ///
    /// A rejected challenger yields `Ok` with `state == Rejected`; only
    /// infrastructure failures return `Err`.
    pub fn run(&mut self, model_name: &str, frame: &ValidationFrame) -> Result<ValidationReport> {
        let challenger = self.registry.get_version_by_alias(model_name, Alias::Challenger)?;

        let outcomes = self.suite.run(self.registry, self.runs, model_name)?;

        let (challenger_value, champion_value, champion_exists) =
            self.simulate_value(model_name, frame)?;

        let (state, failing_tags) = match self.gate.promote(self.registry, model_name) {
            Ok(state) => (state, Vec::new()),
            Err(GateError::NotReady { failing }) => (GateState::Rejected, failing),
            Err(GateError::Registry(e)) => return Err(e.into()),
        };

        Ok(ValidationReport {
            model_name: model_name.to_string(),
            version: challenger.version,
            outcomes,
            challenger_value,
            champion_value,
            champion_exists,
            state,
            failing_tags,
        })
    }
}
