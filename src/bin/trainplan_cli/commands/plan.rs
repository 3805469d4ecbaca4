// ABOUTME: Plan command for trainplan-cli
// ABOUTME: Reads a plan request file and prints the synthesized weekly plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use tracing::info;
use trainplan::pipeline::{PlanPipeline, PlanRequest};

use super::resolve_config;
use crate::helpers::display::{render, OutputFormat};

/// Plan the week described by a request file
pub fn run(
    input: &Path,
    intervals: Option<&Path>,
    interval_type: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let pipeline = PlanPipeline::new(resolve_config(intervals, interval_type)?)?;
    let request = PlanRequest::from_path(input)?;

    let plan = pipeline.plan(&request)?;
    info!(
        planned_days = plan.len(),
        intervals = plan.total_intervals(),
        "Plan ready"
    );

    println!("{}", render(&plan, format)?);
    Ok(())
}
