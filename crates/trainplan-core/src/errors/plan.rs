// ABOUTME: Error types raised by the denormalize, repair and synthesis stages
// ABOUTME: Converts into AppError so callers see stable error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::json;

use super::{AppError, ErrorCode};

/// Failures of the planning pipeline.
///
/// All variants are fatal for the invocation; nothing in the pipeline retries.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// A metric required by a stage has no entry in its lookup table
    #[error("Metric '{metric}' not found in {source_table}")]
    MetricNotFound {
        /// Name of the missing metric
        metric: String,
        /// Table the lookup was made against
        source_table: &'static str,
    },

    /// A lookup table carries a metric that the schema does not declare
    #[error("Metric '{metric}' in {source_table} is not part of the metric schema")]
    UnexpectedMetric {
        /// Name of the undeclared metric
        metric: String,
        /// Table carrying the extra metric
        source_table: &'static str,
    },

    /// The metric schema lists the same name twice
    #[error("Metric '{metric}' appears more than once in the metric schema")]
    DuplicateMetric {
        /// Repeated metric name
        metric: String,
    },

    /// The suggestion matrix does not have one row per day
    #[error("Suggestion must have {expected} daily rows, got {actual}")]
    DayCountMismatch {
        /// Required number of rows
        expected: usize,
        /// Rows supplied
        actual: usize,
    },

    /// A suggestion row does not have one column per metric
    #[error("Suggestion row {row} has {actual} columns, expected {expected}")]
    ColumnCountMismatch {
        /// Zero-based row index
        row: usize,
        /// Required number of columns
        expected: usize,
        /// Columns supplied
        actual: usize,
    },

    /// The suggestion matrix is not as wide as the metric schema
    #[error("Suggestion has {actual} metric columns but the schema declares {expected}")]
    SchemaWidthMismatch {
        /// Number of metrics in the schema
        expected: usize,
        /// Columns supplied
        actual: usize,
    },

    /// A daily load that drives interval packing is infinite or NaN
    #[error("Metric '{metric}' on day {day} is not a finite distance: {value}")]
    NonFiniteLoad {
        /// Series carrying the value
        metric: String,
        /// One-based day number
        day: u8,
        /// Rejected value
        value: f64,
    },

    /// The daily budgets admit more intervals than one session may hold
    #[error("Day {day} budgets allow {count} intervals, limit is {limit}")]
    TooManyIntervals {
        /// One-based day number
        day: u8,
        /// Intervals the budgets would pack
        count: f64,
        /// Maximum intervals per session
        limit: usize,
    },

    /// The requested interval type has no template
    #[error("Interval type '{interval_type}' not found in template catalog")]
    UnknownIntervalType {
        /// Requested interval type
        interval_type: String,
    },

    /// An interval template cannot produce bounded intervals
    #[error("Interval template '{name}' is invalid: {reason}")]
    InvalidTemplate {
        /// Template name
        name: String,
        /// Why the template was rejected
        reason: String,
    },

    /// A configured distance is negative or not finite
    #[error("{field} must be a finite distance >= 0 km, got {value}")]
    InvalidDistance {
        /// Name of the distance setting
        field: &'static str,
        /// Rejected value
        value: f64,
    },
}

impl PlanError {
    /// Create a "metric not found" error
    #[must_use]
    pub fn metric_not_found(metric: impl Into<String>, source_table: &'static str) -> Self {
        Self::MetricNotFound {
            metric: metric.into(),
            source_table,
        }
    }

    /// Create an "invalid template" error
    #[must_use]
    pub fn invalid_template(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Error code reported for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MetricNotFound { .. } => ErrorCode::MissingRequiredField,
            Self::UnexpectedMetric { .. } | Self::DuplicateMetric { .. } => {
                ErrorCode::InvalidInput
            }
            Self::DayCountMismatch { .. }
            | Self::ColumnCountMismatch { .. }
            | Self::SchemaWidthMismatch { .. } => ErrorCode::InvalidFormat,
            Self::NonFiniteLoad { .. } | Self::TooManyIntervals { .. } => {
                ErrorCode::ValueOutOfRange
            }
            Self::UnknownIntervalType { .. } => ErrorCode::ConfigMissing,
            Self::InvalidTemplate { .. } | Self::InvalidDistance { .. } => {
                ErrorCode::ConfigInvalid
            }
        }
    }
}

impl From<PlanError> for AppError {
    fn from(error: PlanError) -> Self {
        let details = match &error {
            PlanError::MetricNotFound { metric, .. } | PlanError::UnexpectedMetric { metric, .. } => {
                json!({ "metric": metric })
            }
            PlanError::UnknownIntervalType { interval_type } => {
                json!({ "interval_type": interval_type })
            }
            PlanError::NonFiniteLoad { metric, day, .. } => {
                json!({ "metric": metric, "day": day })
            }
            PlanError::TooManyIntervals { day, limit, .. } => {
                json!({ "day": day, "limit": limit })
            }
            _ => json!({}),
        };
        Self::new(error.code(), error.to_string())
            .with_details(details)
            .with_source(error)
    }
}
