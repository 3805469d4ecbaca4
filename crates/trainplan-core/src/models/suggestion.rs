// ABOUTME: Relative (model space) and absolute (physical unit) training-load suggestions
// ABOUTME: Validates the 7-day matrix shape and provides metric series lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_WEEK;
use crate::errors::PlanError;

/// One value per day of the planned week
pub type DailyValues = [f64; DAYS_PER_WEEK];

/// Model output: one row per day, one column per metric.
///
/// Values are in the model's own relative scale (conventionally, not
/// strictly, 0..=1) and are not range checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct RelativeSuggestion {
    rows: Vec<Vec<f64>>,
}

impl RelativeSuggestion {
    /// Wrap a day-major matrix
    ///
    /// # Errors
    ///
    /// Returns `PlanError::DayCountMismatch` unless there are exactly seven rows,
    /// and `PlanError::ColumnCountMismatch` if rows differ in width
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, PlanError> {
        if rows.len() != DAYS_PER_WEEK {
            return Err(PlanError::DayCountMismatch {
                expected: DAYS_PER_WEEK,
                actual: rows.len(),
            });
        }
        let width = rows[0].len();
        if let Some((row, ragged)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(PlanError::ColumnCountMismatch {
                row,
                expected: width,
                actual: ragged.len(),
            });
        }
        Ok(Self { rows })
    }

    /// Wrap a fixed-size week, whose shape is already guaranteed by its type
    #[must_use]
    pub fn from_days<const N: usize>(days: [[f64; N]; DAYS_PER_WEEK]) -> Self {
        Self {
            rows: days.iter().map(|day| day.to_vec()).collect(),
        }
    }

    /// Number of metric columns
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// The seven daily values of one column
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.column_count()`
    #[must_use]
    pub fn column(&self, index: usize) -> DailyValues {
        let mut values = [0.0; DAYS_PER_WEEK];
        for (value, row) in values.iter_mut().zip(&self.rows) {
            *value = row[index];
        }
        values
    }

    /// Rows in day order
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

impl TryFrom<Vec<Vec<f64>>> for RelativeSuggestion {
    type Error = PlanError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<RelativeSuggestion> for Vec<Vec<f64>> {
    fn from(suggestion: RelativeSuggestion) -> Self {
        suggestion.rows
    }
}

/// Training load in physical units (km, counts, hours), keyed by metric name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbsoluteSuggestion {
    metrics: BTreeMap<String, DailyValues>,
}

impl AbsoluteSuggestion {
    /// Create an empty suggestion
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the series of a metric, returning the previous one
    pub fn insert(&mut self, metric: impl Into<String>, values: DailyValues) -> Option<DailyValues> {
        self.metrics.insert(metric.into(), values)
    }

    /// Remove a metric, returning its series
    pub fn remove(&mut self, metric: &str) -> Option<DailyValues> {
        self.metrics.remove(metric)
    }

    /// Series of a metric if present
    #[must_use]
    pub fn get(&self, metric: &str) -> Option<&DailyValues> {
        self.metrics.get(metric)
    }

    /// Series of a metric that a stage requires
    ///
    /// # Errors
    ///
    /// Returns `PlanError::MetricNotFound` if the metric is absent
    pub fn series(&self, metric: &str) -> Result<&DailyValues, PlanError> {
        self.metrics
            .get(metric)
            .ok_or_else(|| PlanError::metric_not_found(metric, "absolute suggestion"))
    }

    /// Whether the metric is present
    #[must_use]
    pub fn contains(&self, metric: &str) -> bool {
        self.metrics.contains_key(metric)
    }

    /// Metric names in sorted order
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }

    /// Number of metrics
    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether no metric is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Iterate over metrics and their series
    pub fn iter(&self) -> btree_map::Iter<'_, String, DailyValues> {
        self.metrics.iter()
    }

    /// Iterate mutably over metrics and their series
    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, DailyValues> {
        self.metrics.iter_mut()
    }
}

impl<S: Into<String>> FromIterator<(S, DailyValues)> for AbsoluteSuggestion {
    fn from_iter<T: IntoIterator<Item = (S, DailyValues)>>(iter: T) -> Self {
        Self {
            metrics: iter
                .into_iter()
                .map(|(metric, values)| (metric.into(), values))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AbsoluteSuggestion {
    type Item = (&'a String, &'a DailyValues);
    type IntoIter = btree_map::Iter<'a, String, DailyValues>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
