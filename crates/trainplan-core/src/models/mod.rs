// ABOUTME: Data models for metric statistics, load suggestions and weekly training plans
// ABOUTME: Re-exports metric, suggestion and plan types for the pipeline stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - [`metrics`]: per-metric dataset ranges, athlete baselines and the ordered metric schema
//! - [`suggestion`]: relative (model space) and absolute (physical units) load suggestions
//! - [`plan`]: the sparse seven day training plan produced by synthesis

/// Metric ranges, athlete statistics and the metric schema
pub mod metrics;

/// Relative and absolute training-load suggestions
pub mod suggestion;

/// Training plan structure
pub mod plan;

pub use metrics::{AthleteBaseline, AthleteStats, MetricRange, MetricSchema, RangeTable};
pub use plan::{DayPlan, Interval, RunningSession, TrainingPlan, ZoneDistance};
pub use suggestion::{AbsoluteSuggestion, DailyValues, RelativeSuggestion};
