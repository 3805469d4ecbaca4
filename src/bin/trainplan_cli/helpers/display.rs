// ABOUTME: Output formatting helpers for trainplan-cli
// ABOUTME: Renders pipeline results as JSON or YAML and prints the interval catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use trainplan::config::IntervalCatalog;

/// Serialization format of command output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Serialize a value in the requested format
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    })
}

/// Print a titled block
pub fn print_section<T: Serialize>(title: &str, value: &T, format: OutputFormat) -> Result<()> {
    println!("\n{title}");
    println!("{}", "=".repeat(title.len()));
    println!("{}", render(value, format)?);
    Ok(())
}

/// Print every template, marking the selected one
pub fn display_catalog(catalog: &IntervalCatalog, selected: &str) {
    println!("\nInterval templates ({})", catalog.len());
    println!("{}", "=".repeat(40));
    for (name, template) in catalog.iter() {
        let marker = if name == selected { "*" } else { " " };
        println!(
            "{marker} {name}: effort {} {} km, recovery {} {} km",
            template.effort().zone,
            template.effort().km,
            template.recovery().zone,
            template.recovery().km
        );
    }
}
