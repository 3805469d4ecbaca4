// ABOUTME: Integration tests for weekly plan synthesis
// ABOUTME: Covers the skip rule, cooldown capping, dual-budget interval packing and serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_km, init_test_logging, repaired_suggestion, uniform_suggestion, EPSILON};
use serde_json::json;
use trainplan::config::{IntervalCatalog, IntervalTemplate};
use trainplan::constants::limits::MAX_INTERVALS_PER_SESSION;
use trainplan::constants::metrics::{KM_Z5, TOTAL_KM};
use trainplan::errors::PlanError;
use trainplan::models::{Interval, TrainingPlan, ZoneDistance};
use trainplan::pipeline::PlanSynthesizer;

fn synthesize_default(total_km: f64, zone5_km: f64) -> TrainingPlan {
    PlanSynthesizer::default()
        .synthesize(
            &uniform_suggestion(total_km, zone5_km),
            &IntervalCatalog::default(),
            "default",
        )
        .unwrap()
}

#[test]
fn test_day_below_warmup_is_absent() {
    init_test_logging();
    let suggestion = repaired_suggestion(
        [0.8, 5.0, 1.49, 1.5, 0.0, 10.0, 0.8],
        [3.0; 7],
        0.0,
        0.0,
    );

    let plan = PlanSynthesizer::default()
        .synthesize(&suggestion, &IntervalCatalog::default(), "default")
        .unwrap();

    assert_eq!(plan.planned_days().collect::<Vec<_>>(), vec![2, 4, 6]);
    let value = serde_json::to_value(&plan).unwrap();
    assert!(value.get("day_1").is_none());
    assert!(value.get("day_2").is_some());
}

#[test]
fn test_zone5_budget_scenario() {
    let plan = synthesize_default(10.0, 3.0);
    let running = &plan.day(1).unwrap().running;

    assert_eq!(running.warmup, ZoneDistance::new("Z2", 1.5));
    assert_eq!(running.cooldown, Some(ZoneDistance::new("Z2", 1.5)));
    assert_eq!(running.main.len(), 3);
    for interval in &running.main {
        assert_eq!(interval.effort, ZoneDistance::new("Z5", 1.0));
        assert_eq!(interval.recovery, ZoneDistance::new("Z2", 1.0));
    }
}

#[test]
fn test_no_cooldown_when_warmup_uses_everything() {
    let plan = synthesize_default(1.5, 5.0);
    let running = &plan.day(3).unwrap().running;

    assert!(running.cooldown.is_none());
    assert!(running.main.is_empty());
    let value = serde_json::to_value(running).unwrap();
    assert_eq!(
        value,
        json!({"session_1": {"warmup": {"Z2": 1.5}, "main": {}}})
    );
}

#[test]
fn test_effort_alone_is_not_enough() {
    // 4.0 - 1.5 - 1.5 = 1.0 km left: room for the effort but not the recovery
    let plan = synthesize_default(4.0, 5.0);
    assert!(plan.day(1).unwrap().running.main.is_empty());
}

#[test]
fn test_interval_budgets_hold_across_inputs() {
    let synthesizer = PlanSynthesizer::default();
    let catalog = IntervalCatalog::default();
    let template = catalog.get("default").unwrap();

    for total_tenths in (0..=200).step_by(7) {
        for zone5_tenths in (0..=80).step_by(3) {
            let total_km = f64::from(total_tenths) / 10.0;
            let zone5_km = f64::from(zone5_tenths) / 10.0;
            let plan = synthesizer
                .synthesize(&uniform_suggestion(total_km, zone5_km), &catalog, "default")
                .unwrap();

            let Some(day) = plan.day(1) else {
                assert!(total_km < synthesizer.warmup_km());
                continue;
            };
            let running = &day.running;
            let effort_km = running.main.len() as f64 * template.effort().km;
            let interval_km: f64 = running.main.iter().map(Interval::km).sum();
            let cooldown_km = running.cooldown.as_ref().map_or(0.0, |c| c.km);

            assert!(effort_km <= zone5_km + EPSILON);
            assert!(interval_km <= total_km - running.warmup.km - cooldown_km + EPSILON);
            assert!(running.km() <= total_km + EPSILON);
        }
    }
}

#[test]
fn test_intervals_numbered_from_one() {
    let plan = synthesize_default(9.0, 3.0);
    let value = serde_json::to_value(&plan).unwrap();
    let main = &value["day_1"]["running"]["session_1"]["main"];

    assert_eq!(main.as_object().unwrap().len(), 3);
    assert_eq!(main["interval_1"], json!([{"Z5": 1.0}, {"Z2": 1.0}]));
    assert!(main.get("interval_3").is_some());
    assert!(main.get("interval_0").is_none());
    assert!(main.get("interval_4").is_none());
}

#[test]
fn test_strength_and_alternative_copied_from_suggestion() {
    let suggestion = repaired_suggestion([6.0; 7], [1.0; 7], 2.0, 0.75);
    let plan = PlanSynthesizer::default()
        .synthesize(&suggestion, &IntervalCatalog::default(), "default")
        .unwrap();

    let day = plan.day(5).unwrap();
    assert_km(day.strength, 2.0);
    assert_km(day.alternative, 0.75);
}

#[test]
fn test_custom_template_and_distances() {
    let mut catalog = IntervalCatalog::default();
    catalog.insert(
        "short",
        IntervalTemplate::new(
            "short",
            ZoneDistance::new("Z5", 0.4),
            ZoneDistance::new("Z1", 0.2),
        )
        .unwrap(),
    );
    let synthesizer = PlanSynthesizer::new(2.0, 1.0).unwrap();

    // 6.0 - 2.0 - 1.0 = 3.0 km, Z5 budget 1.0 km: two efforts fit (0.8), a third would need 1.2
    let plan = synthesizer
        .synthesize(&uniform_suggestion(6.0, 1.0), &catalog, "short")
        .unwrap();
    let running = &plan.day(1).unwrap().running;

    assert_eq!(running.main.len(), 2);
    assert_eq!(running.main[0].recovery.zone, "Z1");
    assert_eq!(running.warmup, ZoneDistance::new("Z2", 2.0));
}

#[test]
fn test_unknown_interval_type() {
    let error = PlanSynthesizer::default()
        .synthesize(&uniform_suggestion(10.0, 3.0), &IntervalCatalog::default(), "hills")
        .unwrap_err();

    assert_eq!(
        error,
        PlanError::UnknownIntervalType {
            interval_type: "hills".to_owned()
        }
    );
}

#[test]
fn test_missing_series_fails_even_if_all_days_skipped() {
    let mut suggestion = uniform_suggestion(0.0, 0.0);
    suggestion.remove(KM_Z5);

    let error = PlanSynthesizer::default()
        .synthesize(&suggestion, &IntervalCatalog::default(), "default")
        .unwrap_err();

    assert_eq!(error, PlanError::metric_not_found(KM_Z5, "absolute suggestion"));
}

#[test]
fn test_total_km_required() {
    let mut suggestion = uniform_suggestion(8.0, 2.0);
    suggestion.remove(TOTAL_KM);

    assert!(matches!(
        PlanSynthesizer::default().synthesize(&suggestion, &IntervalCatalog::default(), "default"),
        Err(PlanError::MetricNotFound { .. })
    ));
}

#[test]
fn test_infinite_total_rejected_before_packing() {
    let error = PlanSynthesizer::default()
        .synthesize(
            &uniform_suggestion(f64::INFINITY, f64::INFINITY),
            &IntervalCatalog::default(),
            "default",
        )
        .unwrap_err();

    assert_eq!(
        error,
        PlanError::NonFiniteLoad {
            metric: TOTAL_KM.to_owned(),
            day: 1,
            value: f64::INFINITY,
        }
    );
}

#[test]
fn test_nan_zone5_rejected_on_its_day() {
    let mut zone5 = [2.0; 7];
    zone5[4] = f64::NAN;
    let suggestion = repaired_suggestion([8.0; 7], zone5, 0.0, 0.0);

    let result =
        PlanSynthesizer::default().synthesize(&suggestion, &IntervalCatalog::default(), "default");

    assert!(matches!(
        result,
        Err(PlanError::NonFiniteLoad { ref metric, day: 5, value }) if metric == KM_Z5 && value.is_nan()
    ));
}

#[test]
fn test_huge_finite_budget_fails_instead_of_packing() {
    // x - 1.0 == x at this magnitude, so the budgets would never run out
    for total_km in [1e10, 1e17, f64::MAX] {
        let result = PlanSynthesizer::default().synthesize(
            &uniform_suggestion(total_km, total_km),
            &IntervalCatalog::default(),
            "default",
        );

        match result {
            Err(PlanError::TooManyIntervals { day, count, limit }) => {
                assert_eq!(day, 1);
                assert_eq!(limit, MAX_INTERVALS_PER_SESSION);
                assert!(count > limit as f64);
            }
            other => panic!("expected interval limit error for {total_km}, got {other:?}"),
        }
    }
}

#[test]
fn test_zone5_limited_day_with_large_total_still_planned() {
    // total km alone would allow far more pairs; zone 5 keeps the count small
    let plan = synthesize_default(1e12, 4.0);
    assert_eq!(plan.day(1).unwrap().running.main.len(), 4);
}
