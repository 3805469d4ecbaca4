// ABOUTME: Demonstration request with a mock model suggestion, dataset ranges and athlete baseline
// ABOUTME: Shared by the CLI demo command, integration tests and benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::metrics::{
    HOURS_ALTERNATIVE, KM_SPRINTING, KM_Z3_4, KM_Z5_T1_T2, NR_SESSIONS, STRENGTH_TRAINING,
    TOTAL_KM,
};
use crate::models::{
    AthleteBaseline, AthleteStats, MetricRange, MetricSchema, RangeTable, RelativeSuggestion,
};

use super::PlanRequest;

/// Identifier attached to the demonstration request
pub const DEMO_ATHLETE_ID: &str = "demo-athlete";

/// Mock model output in standard column order, one row per day
pub const DEMO_SUGGESTION: [[f64; 7]; 7] = [
    [0.5, 0.7, 0.1, 0.2, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    [0.5, 0.7, 0.1, 0.2, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    [0.5, 0.7, 0.1, 0.2, 1.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.5, 0.7, 0.1, 0.2, 1.0, 0.0, 0.0],
];

/// Dataset ranges of the demonstration model
#[must_use]
pub fn demo_ranges() -> RangeTable {
    [
        (NR_SESSIONS, MetricRange::new(0.0, 4.0)),
        (TOTAL_KM, MetricRange::new(0.0, 4.0)),
        (KM_Z3_4, MetricRange::new(0.0, 4.0)),
        (KM_Z5_T1_T2, MetricRange::new(0.0, 4.0)),
        (KM_SPRINTING, MetricRange::new(0.0, 4.0)),
        (STRENGTH_TRAINING, MetricRange::new(0.0, 1.0)),
        (HOURS_ALTERNATIVE, MetricRange::new(0.0, 1.0)),
    ]
    .into_iter()
    .map(|(metric, range)| (metric.to_owned(), range))
    .collect()
}

/// Baseline of the demonstration athlete
#[must_use]
pub fn demo_baseline() -> AthleteBaseline {
    [
        (NR_SESSIONS, AthleteStats::new(1.0, 0.2)),
        (TOTAL_KM, AthleteStats::new(5.0, 1.0)),
        (KM_Z3_4, AthleteStats::new(1.0, 1.0)),
        (KM_Z5_T1_T2, AthleteStats::new(2.0, 1.0)),
        (KM_SPRINTING, AthleteStats::new(0.5, 1.0)),
        (STRENGTH_TRAINING, AthleteStats::new(0.4, 1.0)),
        (HOURS_ALTERNATIVE, AthleteStats::new(0.5, 1.0)),
    ]
    .into_iter()
    .map(|(metric, stats)| (metric.to_owned(), stats))
    .collect()
}

/// Complete demonstration request
#[must_use]
pub fn demo_request() -> PlanRequest {
    PlanRequest {
        athlete_id: Some(DEMO_ATHLETE_ID.to_owned()),
        schema: MetricSchema::standard(),
        suggestion: RelativeSuggestion::from_days(DEMO_SUGGESTION),
        range_per_metric: demo_ranges(),
        athlete_data: demo_baseline(),
    }
}
