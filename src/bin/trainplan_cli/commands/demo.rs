// ABOUTME: Demo command for trainplan-cli
// ABOUTME: Runs the demonstration request and prints absolute, repaired and planned load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use tracing::info;
use trainplan::pipeline::{sample, PlanPipeline};

use super::resolve_config;
use crate::helpers::display::{print_section, OutputFormat};

/// Run the pipeline on the demonstration data
pub fn run(format: OutputFormat) -> Result<()> {
    let pipeline = PlanPipeline::new(resolve_config(None, None)?)?;
    let request = sample::demo_request();
    info!(athlete_id = ?request.athlete_id, "Running demonstration request");

    let output = pipeline.run(&request)?;

    print_section("Absolute suggestion", &output.absolute, format)?;
    print_section("Repaired suggestion", &output.repaired, format)?;
    print_section("Training plan", &output.plan, format)?;

    Ok(())
}
