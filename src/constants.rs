// ABOUTME: Metric names, zone labels and planning defaults re-exported from trainplan-core
// ABOUTME: Single import point for constants used by the pipeline and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use trainplan_core::constants::*;
