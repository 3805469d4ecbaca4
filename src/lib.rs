// ABOUTME: Main library entry point for the trainplan weekly training plan generator
// ABOUTME: Denormalizes model load forecasts, repairs them and synthesizes daily sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainplan
//!
//! Turns a normalized, per-metric training-load forecast produced by an
//! external predictive model into a concrete 7-day endurance training plan.
//!
//! ## Pipeline
//!
//! The control flow is strictly linear:
//!
//! 1. **Denormalizer** maps the relative 7×M matrix into absolute units using
//!    the dataset range and the athlete's personal statistics
//! 2. **Repairer** rounds count metrics, clamps negatives and merges the two
//!    zone 5 metrics into `km Z5`
//! 3. **Plan Synthesizer** packs warmup, interval pairs and cooldown into a
//!    running session per day and attaches strength and cross-training load
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::error::Error;
//!
//! use trainplan::config::PlanConfig;
//! use trainplan::pipeline::{sample, PlanPipeline};
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     let pipeline = PlanPipeline::new(PlanConfig::global().clone())?;
//!     let plan = pipeline.plan(&sample::demo_request())?;
//!     println!("{}", serde_json::to_string_pretty(&plan)?);
//!     Ok(())
//! }
//! ```

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Metric names, zone labels and planning defaults
pub mod constants;

/// Suggestion and training plan data models
pub mod models;

/// Planning configuration (distances, interval catalog, rounding policy)
pub mod config;

/// Structured logging setup
pub mod logging;

/// Denormalize, repair and synthesis stages plus orchestration
pub mod pipeline;
