// ABOUTME: Error types for the planning pipeline re-exported from trainplan-core
// ABOUTME: Provides AppError, AppResult, ErrorCode and PlanError to the main crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use trainplan_core::errors::*;
