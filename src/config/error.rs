// ABOUTME: Configuration error types for planning settings and interval catalogs
// ABOUTME: Defines parse, file access and validation failures with AppError conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.

use std::io;
use std::path::PathBuf;

use serde_json::json;
use thiserror::Error;

use crate::errors::{AppError, ErrorCode, PlanError};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse an environment value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Catalog file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Catalog is not valid YAML/JSON or a template is invalid
    #[error("Invalid interval catalog {origin}: {reason}")]
    Catalog {
        /// File path or description of the parsed document
        origin: String,
        /// Parser message
        reason: String,
    },

    /// A setting violates a planning constraint
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::Plan(plan) => plan.into(),
            ConfigError::Io { ref path, .. } => {
                let details = json!({ "path": path.display().to_string() });
                Self::new(ErrorCode::ConfigMissing, error.to_string())
                    .with_details(details)
                    .with_source(error)
            }
            ConfigError::Parse(_) | ConfigError::Catalog { .. } => {
                Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
            }
        }
    }
}
