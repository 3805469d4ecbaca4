// ABOUTME: Templates command for trainplan-cli
// ABOUTME: Lists interval templates with their effort and recovery segments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;

use super::resolve_config;
use crate::helpers::display::display_catalog;

/// List the interval catalog
pub fn list(intervals: Option<&Path>) -> Result<()> {
    let config = resolve_config(intervals, None)?;
    display_catalog(&config.intervals, &config.interval_type);
    Ok(())
}
