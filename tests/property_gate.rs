//! Property tests for the validation checks, business value, and gate
//!
//! Ensures the promotion invariants hold over generated inputs:
//! - Description tag is a pure function of description length
//! - Metric tag ordering semantics (>= passes, missing champion passes)
//! - Business value is linear in the confusion matrix counts
//! - Promotion occurs iff both tags are the literal "True"

use ascender::checks::{ValidationSuite, TAG_HAS_DESCRIPTION, TAG_METRIC_F1_PASSED};
use ascender::eval::{business_value, BinaryConfusionMatrix, CostTable};
use ascender::gate::{GateState, PromotionGate};
use ascender::registry::{Alias, InMemoryRegistry, ModelRegistry};
use ascender::tracking::{InMemoryRunStore, RunStore, TrainingRun};
use proptest::prelude::*;

fn seeded_registry(
    description: &str,
    challenger_f1: f64,
    champion_f1: Option<f64>,
) -> (InMemoryRegistry, InMemoryRunStore) {
    let mut registry = InMemoryRegistry::new();
    let mut runs = InMemoryRunStore::new();

    if let Some(f1) = champion_f1 {
        let mut run = TrainingRun::new("run-champ");
        run.metrics.insert("test_f1_score".into(), f1);
        runs.record_run(run).unwrap();
        let v = registry.register_version("m", Some("reigning champion model"), "run-champ").unwrap();
        registry.set_alias("m", Alias::Champion, v.version).unwrap();
    }

    let mut run = TrainingRun::new("run-chall");
    run.metrics.insert("test_f1_score".into(), challenger_f1);
    runs.record_run(run).unwrap();
    let desc = if description.is_empty() { None } else { Some(description) };
    let v = registry.register_version("m", desc, "run-chall").unwrap();
    registry.set_alias("m", Alias::Challenger, v.version).unwrap();

    (registry, runs)
}

proptest! {
    #[test]
    fn prop_description_tag_is_length_threshold(len in 0usize..100) {
        let desc = "d".repeat(len);
        let (mut registry, runs) = seeded_registry(&desc, 0.5, None);
        ValidationSuite::default().run(&mut registry, &runs, "m").unwrap();

        let mv = registry.get_version_by_alias("m", Alias::Challenger).unwrap();
        let expected = if len > 20 { "True" } else { "False" };
        prop_assert_eq!(&mv.tags[TAG_HAS_DESCRIPTION], expected);
    }

    #[test]
    fn prop_no_champion_always_passes_metric(f1 in 0.0f64..1.0) {
        let (mut registry, runs) = seeded_registry("sufficiently long description", f1, None);
        ValidationSuite::default().run(&mut registry, &runs, "m").unwrap();

        let mv = registry.get_version_by_alias("m", Alias::Challenger).unwrap();
        prop_assert_eq!(&mv.tags[TAG_METRIC_F1_PASSED], "True");
    }

    #[test]
    fn prop_metric_tag_is_ordering(
        challenger in 0.0f64..1.0,
        champion in 0.0f64..1.0,
    ) {
        let (mut registry, runs) =
            seeded_registry("sufficiently long description", challenger, Some(champion));
        ValidationSuite::default().run(&mut registry, &runs, "m").unwrap();

        let mv = registry.get_version_by_alias("m", Alias::Challenger).unwrap();
        let expected = if challenger >= champion { "True" } else { "False" };
        prop_assert_eq!(&mv.tags[TAG_METRIC_F1_PASSED], expected);
    }

    #[test]
    fn prop_equal_scores_pass(f1 in 0.0f64..1.0) {
        let (mut registry, runs) =
            seeded_registry("sufficiently long description", f1, Some(f1));
        ValidationSuite::default().run(&mut registry, &runs, "m").unwrap();

        let mv = registry.get_version_by_alias("m", Alias::Challenger).unwrap();
        prop_assert_eq!(&mv.tags[TAG_METRIC_F1_PASSED], "True");
    }

    #[test]
    fn prop_business_value_linear(
        tn in 0usize..1000,
        fp in 0usize..1000,
        fn_ in 0usize..1000,
        tp in 0usize..1000,
    ) {
        let cm = BinaryConfusionMatrix::from_counts(tn, fp, fn_, tp);
        let costs = CostTable::churn_default();
        let expected =
            fp as f64 * -500.0 + fn_ as f64 * 2000.0 + tp as f64 * 1500.0;
        prop_assert_eq!(business_value(&cm, &costs), expected);
    }

    #[test]
    fn prop_promotion_iff_both_tags_true(desc_len in 0usize..40, delta in -0.2f64..0.2) {
        let desc = "d".repeat(desc_len);
        let (mut registry, runs) = seeded_registry(&desc, 0.5 + delta, Some(0.5));
        ValidationSuite::default().run(&mut registry, &runs, "m").unwrap();

        let challenger = registry.get_version_by_alias("m", Alias::Challenger).unwrap();
        let gate = PromotionGate::default();
        // Same arithmetic as the check, so rounding at 0.5 + delta agrees
        let should_promote = desc_len > 20 && 0.5 + delta >= 0.5;

        prop_assert_eq!(
            gate.decide(&challenger) == GateState::Promoted,
            should_promote
        );

        let result = gate.promote(&mut registry, "m");
        let champion = registry.get_version_by_alias("m", Alias::Champion).unwrap();
        if should_promote {
            prop_assert!(result.is_ok());
            prop_assert_eq!(champion.version, challenger.version);
        } else {
            prop_assert!(result.is_err());
            // Champion untouched on rejection
            prop_assert_eq!(champion.version, 1);
        }
    }

    #[test]
    fn prop_alias_unique_after_reassignments(moves in proptest::collection::vec(1u64..=5, 1..20)) {
        let mut registry = InMemoryRegistry::new();
        for i in 0..5 {
            registry.register_version("m", None, &format!("run-{i}")).unwrap();
        }
        for &v in &moves {
            registry.set_alias("m", Alias::Champion, v).unwrap();
        }
        let holder = registry.get_version_by_alias("m", Alias::Champion).unwrap();
        prop_assert_eq!(holder.version, *moves.last().unwrap());
    }
}
