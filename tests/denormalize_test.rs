// ABOUTME: Integration tests for the denormalization stage
// ABOUTME: Covers the two-step affine transform, schema ordering and metric table mismatches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_km, init_test_logging};
use trainplan::constants::metrics::{KM_Z3_4, NR_SESSIONS, STANDARD_ORDER, TOTAL_KM};
use trainplan::constants::DAYS_PER_WEEK;
use trainplan::errors::PlanError;
use trainplan::models::{
    AthleteBaseline, AthleteStats, MetricRange, MetricSchema, RangeTable, RelativeSuggestion,
};
use trainplan::pipeline::sample::{demo_baseline, demo_ranges, DEMO_SUGGESTION};
use trainplan::pipeline::Denormalizer;

#[test]
fn test_output_has_one_week_per_schema_metric() {
    init_test_logging();
    let relative = RelativeSuggestion::from_days(DEMO_SUGGESTION);

    let absolute = Denormalizer::standard()
        .denormalize(&relative, &demo_ranges(), &demo_baseline())
        .unwrap();

    let names: Vec<&str> = absolute.metric_names().collect();
    let mut expected = STANDARD_ORDER.to_vec();
    expected.sort_unstable();
    assert_eq!(names, expected);
    assert!(absolute.iter().all(|(_, week)| week.len() == DAYS_PER_WEEK));
}

#[test]
fn test_demo_values() {
    let relative = RelativeSuggestion::from_days(DEMO_SUGGESTION);
    let absolute = Denormalizer::standard()
        .denormalize(&relative, &demo_ranges(), &demo_baseline())
        .unwrap();

    // 0.7 * (4 - 0) + 0 = 2.8, then 2.8 * 1 + 5
    assert_km(absolute.series(TOTAL_KM).unwrap()[0], 7.8);
    assert_km(absolute.series(TOTAL_KM).unwrap()[1], 5.0);
    // 0.5 * 4 = 2.0, then 2.0 * 0.2 + 1
    assert_km(absolute.series(NR_SESSIONS).unwrap()[0], 1.4);
    assert_km(absolute.series(KM_Z3_4).unwrap()[0], 1.4);
}

#[test]
fn test_full_relative_value_maps_to_range_max_z_score() {
    let schema = MetricSchema::new([TOTAL_KM]).unwrap();
    let relative = RelativeSuggestion::new(vec![vec![1.0]; DAYS_PER_WEEK]).unwrap();
    let ranges = RangeTable::from([(TOTAL_KM.to_owned(), MetricRange::new(0.0, 4.0))]);
    let stats = AthleteBaseline::from([(TOTAL_KM.to_owned(), AthleteStats::new(5.0, 1.0))]);

    let absolute = Denormalizer::new(schema)
        .denormalize(&relative, &ranges, &stats)
        .unwrap();

    for value in absolute.series(TOTAL_KM).unwrap() {
        assert_km(*value, 9.0);
    }
}

#[test]
fn test_columns_follow_schema_not_table_order() {
    // "total km" sorts after "km Z3-4" in the tables, but is column 0 here
    let schema = MetricSchema::new([TOTAL_KM, KM_Z3_4]).unwrap();
    let relative = RelativeSuggestion::new(vec![vec![1.0, 0.0]; DAYS_PER_WEEK]).unwrap();
    let ranges = RangeTable::from([
        (TOTAL_KM.to_owned(), MetricRange::new(0.0, 4.0)),
        (KM_Z3_4.to_owned(), MetricRange::new(0.0, 4.0)),
    ]);
    let stats = AthleteBaseline::from([
        (TOTAL_KM.to_owned(), AthleteStats::new(0.0, 1.0)),
        (KM_Z3_4.to_owned(), AthleteStats::new(0.0, 1.0)),
    ]);

    let absolute = Denormalizer::new(schema)
        .denormalize(&relative, &ranges, &stats)
        .unwrap();

    assert_km(absolute.series(TOTAL_KM).unwrap()[0], 4.0);
    assert_km(absolute.series(KM_Z3_4).unwrap()[0], 0.0);
}

#[test]
fn test_out_of_range_relative_values_are_not_rejected() {
    let schema = MetricSchema::new([TOTAL_KM]).unwrap();
    let relative = RelativeSuggestion::new(vec![vec![-3.0]; DAYS_PER_WEEK]).unwrap();
    let ranges = RangeTable::from([(TOTAL_KM.to_owned(), MetricRange::new(0.0, 4.0))]);
    let stats = AthleteBaseline::from([(TOTAL_KM.to_owned(), AthleteStats::new(5.0, 1.0))]);

    let absolute = Denormalizer::new(schema)
        .denormalize(&relative, &ranges, &stats)
        .unwrap();

    assert_km(absolute.series(TOTAL_KM).unwrap()[0], -7.0);
}

#[test]
fn test_metric_missing_from_ranges() {
    let relative = RelativeSuggestion::from_days(DEMO_SUGGESTION);
    let mut ranges = demo_ranges();
    ranges.remove(KM_Z3_4);

    let error = Denormalizer::standard()
        .denormalize(&relative, &ranges, &demo_baseline())
        .unwrap_err();

    assert_eq!(error, PlanError::metric_not_found(KM_Z3_4, "metric ranges"));
}

#[test]
fn test_extra_metric_in_athlete_stats() {
    let relative = RelativeSuggestion::from_days(DEMO_SUGGESTION);
    let mut stats = demo_baseline();
    stats.insert("km swimming".to_owned(), AthleteStats::new(1.0, 1.0));

    let error = Denormalizer::standard()
        .denormalize(&relative, &demo_ranges(), &stats)
        .unwrap_err();

    assert!(matches!(
        error,
        PlanError::UnexpectedMetric { ref metric, source_table: "athlete stats" } if metric == "km swimming"
    ));
}
