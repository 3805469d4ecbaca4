// ABOUTME: Core types and constants for the trainplan weekly training plan generator
// ABOUTME: Foundation crate with error handling, metric schema, plan models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainplan Core
//!
//! Foundation crate providing the shared data model for turning a normalized
//! training-load forecast into a seven day plan. This crate is designed to
//! change infrequently, enabling incremental compilation benefits in the
//! workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `PlanError`
//! - **constants**: Metric names, zone labels and planning defaults
//! - **models**: Metric schema, suggestion matrices and the training plan structure

/// Unified error handling system with standard error codes
pub mod errors;

/// Metric names, zone labels and planning defaults
pub mod constants;

/// Suggestion and training plan data models
pub mod models;
