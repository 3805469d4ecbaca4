// ABOUTME: Converts the model's relative load matrix into absolute per-metric training load
// ABOUTME: Applies min-max remapping followed by z-score rescaling against the athlete baseline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Denormalization
//!
//! Per metric `k` at column `i` and day `d`:
//!
//! ```text
//! scaled   = relative[d][i] * (range[k].max - range[k].min) + range[k].min
//! absolute = scaled * stats[k].std_dev + stats[k].mean
//! ```
//!
//! The remapped value is treated as a z-score of the athlete's own history.
//! Both steps run in this order with plain multiply/add so results match the
//! upstream model tooling bit for bit.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::constants::DAYS_PER_WEEK;
use crate::errors::PlanError;
use crate::models::{
    AbsoluteSuggestion, AthleteBaseline, AthleteStats, MetricRange, MetricSchema, RangeTable,
    RelativeSuggestion,
};

const RANGES_TABLE: &str = "metric ranges";
const STATS_TABLE: &str = "athlete stats";

/// Maps matrix columns to metrics and rescales them into physical units
#[derive(Debug, Clone, Default)]
pub struct Denormalizer {
    schema: MetricSchema,
}

impl Denormalizer {
    /// Create a denormalizer for a column layout
    #[must_use]
    pub const fn new(schema: MetricSchema) -> Self {
        Self { schema }
    }

    /// Denormalizer for the standard model column layout
    #[must_use]
    pub fn standard() -> Self {
        Self::new(MetricSchema::standard())
    }

    /// Column layout this denormalizer expects
    #[must_use]
    pub const fn schema(&self) -> &MetricSchema {
        &self.schema
    }

    /// Convert a relative suggestion into absolute load
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the matrix width differs from the schema (`SchemaWidthMismatch`)
    /// - a schema metric is missing from `ranges` or `stats` (`MetricNotFound`)
    /// - `ranges` or `stats` contain a metric the schema does not declare (`UnexpectedMetric`)
    #[instrument(level = "debug", skip_all, fields(metrics = self.schema.len()))]
    pub fn denormalize(
        &self,
        relative: &RelativeSuggestion,
        ranges: &RangeTable,
        stats: &AthleteBaseline,
    ) -> Result<AbsoluteSuggestion, PlanError> {
        if relative.column_count() != self.schema.len() {
            return Err(PlanError::SchemaWidthMismatch {
                expected: self.schema.len(),
                actual: relative.column_count(),
            });
        }
        self.reject_unexpected(ranges, RANGES_TABLE)?;
        self.reject_unexpected(stats, STATS_TABLE)?;

        let mut absolute = AbsoluteSuggestion::new();
        for (column, metric) in self.schema.columns() {
            let range = ranges
                .get(metric)
                .ok_or_else(|| PlanError::metric_not_found(metric, RANGES_TABLE))?;
            let baseline = stats
                .get(metric)
                .ok_or_else(|| PlanError::metric_not_found(metric, STATS_TABLE))?;

            let mut values = [0.0; DAYS_PER_WEEK];
            for (value, relative_value) in values.iter_mut().zip(relative.column(column)) {
                *value = to_absolute(relative_value, range, baseline);
            }
            absolute.insert(metric, values);
        }

        debug!(metrics = absolute.len(), "Denormalized relative suggestion");
        Ok(absolute)
    }

    fn reject_unexpected<V>(
        &self,
        table: &BTreeMap<String, V>,
        source_table: &'static str,
    ) -> Result<(), PlanError> {
        match table.keys().find(|metric| !self.schema.contains(metric)) {
            Some(metric) => Err(PlanError::UnexpectedMetric {
                metric: metric.clone(),
                source_table,
            }),
            None => Ok(()),
        }
    }
}

#[allow(clippy::suboptimal_flops)]
fn to_absolute(relative: f64, range: &MetricRange, baseline: &AthleteStats) -> f64 {
    let scaled = relative * range.span() + range.min;
    scaled * baseline.std_dev + baseline.mean
}
