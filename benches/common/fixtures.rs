// ABOUTME: Benchmark fixtures generating deterministic plan requests
// ABOUTME: Provides varied athlete baselines and model suggestions for reproducible measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating plan requests.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use trainplan::constants::DAYS_PER_WEEK;
use trainplan::models::{AthleteStats, RelativeSuggestion};
use trainplan::pipeline::{sample, PlanRequest};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RequestBatchSize {
    /// Small batch (10 athletes) - quick benchmarks
    Small,
    /// Large batch (1000 athletes) - nightly planning run
    Large,
}

impl RequestBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Large => 1000,
        }
    }
}

/// Generate one request per athlete, varying the suggestion and baseline
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_requests(count: usize) -> Vec<PlanRequest> {
    (0..count)
        .map(|index| {
            let mut request = sample::demo_request();
            request.athlete_id = Some(format!("bench_athlete_{index}"));

            let mut days = sample::DEMO_SUGGESTION;
            for (day, row) in days.iter_mut().enumerate() {
                for (column, value) in row.iter_mut().enumerate() {
                    *value = ((index * 31 + day * 17 + column * 7) % 100) as f64 / 100.0;
                }
            }
            request.suggestion = RelativeSuggestion::from_days(days);

            for (offset, stats) in request.athlete_data.values_mut().enumerate() {
                *stats = AthleteStats::new(
                    stats.mean + ((index + offset) % 5) as f64,
                    stats.std_dev * (1.0 + (index % 3) as f64 / 10.0),
                );
            }
            request
        })
        .collect()
}

/// Week of identical days, used to size the interval loop
#[must_use]
pub fn uniform_week(value: f64) -> [f64; DAYS_PER_WEEK] {
    [value; DAYS_PER_WEEK]
}
