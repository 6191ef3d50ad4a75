//! Tests for the validation pipeline

use std::collections::HashMap;

use crate::dataset::{Example, ValidationFrame};
use crate::gate::GateState;
use crate::registry::{Alias, InMemoryRegistry, ModelRegistry};
use crate::scoring::{EchoPredictor, LoadError, ModelLoader, Predictor, ThresholdPredictor};
use crate::tracking::{InMemoryRunStore, RunStore, TrainingRun};

use super::{PipelineError, ValidationPipeline};

/// Loader serving a predictor per alias, keyed on the URI suffix.
#[derive(Default)]
struct AliasLoader {
    models: HashMap<String, Box<dyn Fn() -> Box<dyn Predictor>>>,
    incompatible: bool,
}

impl AliasLoader {
    fn with_echo(mut self, alias: &str) -> Self {
        self.models
            .insert(alias.to_string(), Box::new(|| Box::new(EchoPredictor) as Box<dyn Predictor>));
        self
    }

    fn with_threshold(mut self, alias: &str, feature: &str, threshold: f64) -> Self {
        let feature = feature.to_string();
        self.models.insert(
            alias.to_string(),
            Box::new(move || {
                Box::new(ThresholdPredictor::new(feature.clone(), threshold)) as Box<dyn Predictor>
            }),
        );
        self
    }
}

impl ModelLoader for AliasLoader {
    fn load(&self, uri: &str) -> Result<Box<dyn Predictor>, LoadError> {
        if self.incompatible {
            return Err(LoadError::IncompatibleRuntime { reason: "automl runtime absent".into() });
        }
        let alias = uri.rsplit('@').next().unwrap_or_default();
        self.models
            .get(alias)
            .map(|build| build())
            .ok_or_else(|| LoadError::NotFound { uri: uri.to_string() })
    }
}

fn labeled_frame() -> ValidationFrame {
    // tenure >= 5 predicts churn under the threshold model; labels chosen
    // so the threshold model makes mistakes while echo is perfect
    let rows = [
        (1.0, false, "validate"),
        (6.0, true, "validate"),
        (8.0, false, "validate"),
        (9.0, true, "validate"),
        (3.0, true, "validate"),
        (2.0, false, "train"),
    ];
    ValidationFrame::new(
        rows.iter()
            .map(|&(tenure, label, split)| Example {
                features: HashMap::from([("tenure".to_string(), tenure)]),
                label,
                split: split.to_string(),
            })
            .collect(),
    )
}

fn seed(
    registry: &mut InMemoryRegistry,
    runs: &mut InMemoryRunStore,
    description: Option<&str>,
    f1: f64,
) -> u64 {
    let mut run = TrainingRun::new("run-1");
    run.metrics.insert("test_f1_score".into(), f1);
    runs.record_run(run).unwrap();
    let v = registry.register_version("churn", description, "run-1").unwrap();
    v.version
}

#[test]
fn test_full_run_promotes_first_model() {
    let mut registry = InMemoryRegistry::new();
    let mut runs = InMemoryRunStore::new();
    let v = seed(&mut registry, &mut runs, Some("churn model trained on Q3 data"), 0.9);
    registry.set_alias("churn", Alias::Challenger, v).unwrap();

    let loader = AliasLoader::default().with_echo("Challenger");
    let mut pipeline = ValidationPipeline::new(&mut registry, &runs, &loader);
    let report = pipeline.run("churn", &labeled_frame()).unwrap();

    assert_eq!(report.state, GateState::Promoted);
    assert!(report.promoted());
    assert!(!report.champion_exists);
    assert_eq!(report.champion_value, 0.0);
    // Echo predictor is perfect on the 5 validate rows (3 churners):
    // 2*0 + 0*(-500) + 0*2000 + 3*1500 = 4500
    assert_eq!(report.challenger_value, 4500.0);

    assert_eq!(registry.get_version_by_alias("churn", Alias::Champion).unwrap().version, v);
}

#[test]
fn test_rejected_challenger_reported_not_error() {
    let mut registry = InMemoryRegistry::new();
    let mut runs = InMemoryRunStore::new();
    let v = seed(&mut registry, &mut runs, None, 0.9); // no description -> gate fails
    registry.set_alias("churn", Alias::Challenger, v).unwrap();

    let loader = AliasLoader::default().with_echo("Challenger");
    let mut pipeline = ValidationPipeline::new(&mut registry, &runs, &loader);
    let report = pipeline.run("churn", &labeled_frame()).unwrap();

    assert_eq!(report.state, GateState::Rejected);
    assert_eq!(report.failing_tags, vec!["has_description".to_string()]);
    assert!(registry.get_version_by_alias("churn", Alias::Champion).is_err());
}

#[test]
fn test_simulation_compares_both_models() {
    let mut registry = InMemoryRegistry::new();
    let mut runs = InMemoryRunStore::new();

    // Champion on v1
    let mut champ_run = TrainingRun::new("run-champ");
    champ_run.metrics.insert("test_f1_score".into(), 0.8);
    runs.record_run(champ_run).unwrap();
    registry.register_version("churn", Some("old but serviceable model"), "run-champ").unwrap();
    registry.set_alias("churn", Alias::Champion, 1).unwrap();

    // Challenger on v2
    let mut chall_run = TrainingRun::new("run-chall");
    chall_run.metrics.insert("test_f1_score".into(), 0.9);
    runs.record_run(chall_run).unwrap();
    registry.register_version("churn", Some("retrained with fresh labels"), "run-chall").unwrap();
    registry.set_alias("churn", Alias::Challenger, 2).unwrap();

    // Challenger is the perfect echo, champion the lossy threshold model
    let loader =
        AliasLoader::default().with_echo("Challenger").with_threshold("Champion", "tenure", 5.0);
    let mut pipeline = ValidationPipeline::new(&mut registry, &runs, &loader);
    let report = pipeline.run("churn", &labeled_frame()).unwrap();

    assert!(report.champion_exists);
    // Threshold model on validate rows: tn=1, fp=1, fn=1, tp=2
    // -> 1*0 + 1*(-500) + 1*2000 + 2*1500 = 4500
    assert_eq!(report.champion_value, 4500.0);
    assert_eq!(report.challenger_value, 4500.0);
    assert_eq!(report.state, GateState::Promoted);
    assert_eq!(registry.get_version_by_alias("churn", Alias::Champion).unwrap().version, 2);
}

#[test]
fn test_incompatible_runtime_mocks_predictions() {
    let mut registry = InMemoryRegistry::new();
    let mut runs = InMemoryRunStore::new();
    let v = seed(&mut registry, &mut runs, Some("churn model trained on Q3 data"), 0.9);
    registry.set_alias("churn", Alias::Challenger, v).unwrap();

    let loader = AliasLoader { incompatible: true, ..Default::default() };
    let mut pipeline = ValidationPipeline::new(&mut registry, &runs, &loader);
    let report = pipeline.run("churn", &labeled_frame()).unwrap();

    // Mock predictions equal ground truth: same value as the echo model
    assert_eq!(report.challenger_value, 4500.0);
}

#[test]
fn test_load_failure_aborts_run() {
    let mut registry = InMemoryRegistry::new();
    let mut runs = InMemoryRunStore::new();
    let v = seed(&mut registry, &mut runs, Some("churn model trained on Q3 data"), 0.9);
    registry.set_alias("churn", Alias::Challenger, v).unwrap();

    let loader = AliasLoader::default(); // nothing registered -> NotFound
    let mut pipeline = ValidationPipeline::new(&mut registry, &runs, &loader);
    let err = pipeline.run("churn", &labeled_frame()).unwrap_err();
    assert!(matches!(err, PipelineError::Load(LoadError::NotFound { .. })));
}

#[test]
fn test_report_display() {
    let mut registry = InMemoryRegistry::new();
    let mut runs = InMemoryRunStore::new();
    let v = seed(&mut registry, &mut runs, Some("churn model trained on Q3 data"), 0.9);
    registry.set_alias("churn", Alias::Challenger, v).unwrap();

    let loader = AliasLoader::default().with_echo("Challenger");
    let mut pipeline = ValidationPipeline::new(&mut registry, &runs, &loader);
    let report = pipeline.run("churn", &labeled_frame()).unwrap();

    let shown = format!("{report}");
    assert!(shown.contains("has_description"));
    assert!(shown.contains("metric_f1_passed"));
    assert!(shown.contains("Challenger"));
    assert!(shown.contains("Decision: Promoted"));
    assert!(shown.contains("none registered"));
}
