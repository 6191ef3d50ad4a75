//! Ascender: Challenger/Champion Validation & Promotion Gates
//!
//! Implements the champion/challenger promotion workflow used to admit a
//! newly trained model into serving:
//!
//! 1. **Lookup**: resolve the version currently aliased `@Challenger` in a
//!    model registry.
//! 2. **Validation**: run a fixed sequence of checks (description present,
//!    F1 at least as good as the reigning champion), recording each result
//!    as a tag on the model version.
//! 3. **Business value**: score a held-out validation set with both models
//!    and compare dollar impact derived from the confusion matrix
//!    (informational only, never gates).
//! 4. **Promotion**: read the tags back from the registry; if every
//!    required tag is `"True"`, atomically move the `@Champion` alias to
//!    this version, otherwise reject.
//!
//! # Example
//!
//! ```
//! use ascender::registry::{Alias, InMemoryRegistry, ModelRegistry};
//! use ascender::tracking::{InMemoryRunStore, RunStore, TrainingRun};
//! use ascender::checks::ValidationSuite;
//! use ascender::gate::{GateState, PromotionGate};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = InMemoryRegistry::new();
//! let mut runs = InMemoryRunStore::new();
//!
//! let mut run = TrainingRun::new("run-1");
//! run.metrics.insert("test_f1_score".into(), 0.91);
//! runs.record_run(run)?;
//!
//! let v = registry.register_version(
//!     "churn",
//!     Some("Gradient-boosted churn classifier trained on Q3 data"),
//!     "run-1",
//! )?;
//! registry.set_alias("churn", Alias::Challenger, v.version)?;
//!
//! let suite = ValidationSuite::default();
//! suite.run(&mut registry, &runs, "churn")?;
//!
//! let gate = PromotionGate::default();
//! let state = gate.promote(&mut registry, "churn")?;
//! assert_eq!(state, GateState::Promoted);
//! # Ok(())
//! # }
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod eval;
pub mod gate;
pub mod pipeline;
pub mod registry;
pub mod scoring;
pub mod tracking;
