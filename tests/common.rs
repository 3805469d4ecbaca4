// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging setup plus suggestion and request fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `trainplan`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use std::sync::Once;

use trainplan::config::PlanConfig;
use trainplan::constants::metrics::{HOURS_ALTERNATIVE, KM_Z5, STRENGTH_TRAINING, TOTAL_KM};
use trainplan::constants::DAYS_PER_WEEK;
use trainplan::models::{AbsoluteSuggestion, DailyValues};
use trainplan::pipeline::PlanPipeline;

static INIT_LOGGER: Once = Once::new();

/// Tolerance for floating point comparisons of derived distances
pub const EPSILON: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two distances are equal within [`EPSILON`]
pub fn assert_km(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected} km, got {actual} km"
    );
}

/// Repaired suggestion with the four series synthesis reads
pub fn repaired_suggestion(
    total_km: DailyValues,
    zone5_km: DailyValues,
    strength: f64,
    alternative: f64,
) -> AbsoluteSuggestion {
    [
        (TOTAL_KM, total_km),
        (KM_Z5, zone5_km),
        (STRENGTH_TRAINING, [strength; DAYS_PER_WEEK]),
        (HOURS_ALTERNATIVE, [alternative; DAYS_PER_WEEK]),
    ]
    .into_iter()
    .collect()
}

/// Repaired suggestion where every day has the same distances
pub fn uniform_suggestion(total_km: f64, zone5_km: f64) -> AbsoluteSuggestion {
    repaired_suggestion([total_km; DAYS_PER_WEEK], [zone5_km; DAYS_PER_WEEK], 1.0, 0.5)
}

/// Pipeline built from default configuration
pub fn default_pipeline() -> PlanPipeline {
    init_test_logging();
    PlanPipeline::new(PlanConfig::default()).unwrap()
}
