// ABOUTME: Re-exports command modules for trainplan-cli
// ABOUTME: Provides the demo, plan and templates commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod demo;
pub mod plan;
pub mod templates;

use std::path::Path;

use anyhow::Result;
use trainplan::config::PlanConfig;

/// Global configuration with the command line overrides applied
pub fn resolve_config(
    intervals: Option<&Path>,
    interval_type: Option<String>,
) -> Result<PlanConfig> {
    let mut config = PlanConfig::global().clone();
    if let Some(path) = intervals {
        config = config.with_intervals_file(path)?;
    }
    if let Some(interval_type) = interval_type {
        config = config.with_interval_type(interval_type);
    }
    Ok(config)
}
