// ABOUTME: Trainplan CLI - command-line front end for the weekly training plan pipeline
// ABOUTME: Runs the demonstration data set, plans request files and lists interval templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Run the pipeline on the built-in demonstration data and print every stage
//! trainplan-cli demo
//!
//! # Plan a request file (JSON or YAML by extension)
//! trainplan-cli plan --input athlete.json
//!
//! # Use a custom interval catalog and template, print YAML
//! trainplan-cli plan --input athlete.yaml --intervals intervals.yaml --interval-type short --format yaml
//!
//! # List the available interval templates
//! trainplan-cli templates --intervals intervals.yaml
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use trainplan::logging::LoggingConfig;

use helpers::display::OutputFormat;

#[derive(Parser)]
#[command(
    name = "trainplan-cli",
    about = "Weekly endurance training plan generator",
    long_about = "Turns a normalized training-load forecast into a 7-day plan of running sessions, strength training and cross-training."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run the pipeline on the demonstration data and print every stage
    Demo {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Plan the week for a request file
    Plan {
        /// Request file (`.json` for JSON, anything else is read as YAML)
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Interval catalog file overriding the configured one
        #[arg(long)]
        intervals: Option<PathBuf>,

        /// Interval template to use for the main sets
        #[arg(long)]
        interval_type: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// List the interval templates
    Templates {
        /// Interval catalog file overriding the configured one
        #[arg(long)]
        intervals: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    match cli.command {
        Command::Demo { format } => commands::demo::run(format)?,
        Command::Plan {
            input,
            intervals,
            interval_type,
            format,
        } => commands::plan::run(&input, intervals.as_deref(), interval_type, format)?,
        Command::Templates { intervals } => commands::templates::list(intervals.as_deref())?,
    }

    Ok(())
}
