// ABOUTME: Metric range, athlete baseline and ordered metric schema types
// ABOUTME: The schema pins the positional contract between matrix columns and metric names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::constants::metrics::STANDARD_ORDER;
use crate::errors::PlanError;

/// Observed min/max of a metric in the model's training distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    /// Smallest observed value
    pub min: f64,
    /// Largest observed value
    pub max: f64,
}

impl MetricRange {
    /// Create a range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range (`max - min`)
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Personal baseline of one athlete for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AthleteStats {
    /// Mean of the athlete's history
    pub mean: f64,
    /// Standard deviation of the athlete's history
    pub std_dev: f64,
}

impl AthleteStats {
    /// Create a baseline
    #[must_use]
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

/// Dataset ranges keyed by metric name
pub type RangeTable = BTreeMap<String, MetricRange>;

/// Athlete baselines keyed by metric name
pub type AthleteBaseline = BTreeMap<String, AthleteStats>;

/// Ordered list of metric names.
///
/// Column `i` of a relative suggestion holds the metric at position `i`.
/// Lookup tables keyed by name are joined against this order, never against
/// their own iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MetricSchema {
    names: Vec<String>,
}

impl MetricSchema {
    /// Build a schema from metric names in column order
    ///
    /// # Errors
    ///
    /// Returns `PlanError::DuplicateMetric` if a name appears twice
    pub fn new<I, S>(names: I) -> Result<Self, PlanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(PlanError::DuplicateMetric {
                    metric: name.clone(),
                });
            }
        }
        Ok(Self { names })
    }

    /// Column layout of the standard load forecasting model
    #[must_use]
    pub fn standard() -> Self {
        Self {
            names: STANDARD_ORDER.iter().map(|&name| name.to_owned()).collect(),
        }
    }

    /// Number of metrics (matrix columns)
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the schema has no metrics
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether the schema declares `metric`
    #[must_use]
    pub fn contains(&self, metric: &str) -> bool {
        self.names.iter().any(|name| name == metric)
    }

    /// Metric names with their column index
    pub fn columns(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }

    /// Metric names in column order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for MetricSchema {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<String>> for MetricSchema {
    type Error = PlanError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<MetricSchema> for Vec<String> {
    fn from(schema: MetricSchema) -> Self {
        schema.names
    }
}
