// ABOUTME: Planning pipeline chaining denormalization, repair and plan synthesis
// ABOUTME: Defines the request document, the staged output and parallel batch planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planning Pipeline
//!
//! ```text
//! RelativeSuggestion ─► Denormalizer ─► SuggestionRepairer ─► PlanSynthesizer ─► TrainingPlan
//! ```
//!
//! Every stage is a pure function of its inputs plus the read-only
//! [`PlanConfig`], so one [`PlanPipeline`] can serve many athletes
//! concurrently.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, instrument};

/// Relative to absolute load conversion
pub mod denormalize;
/// Domain constraint repair and rounding policies
pub mod repair;
/// Demonstration data set
pub mod sample;
/// Weekly plan synthesis
pub mod synthesis;

pub use denormalize::Denormalizer;
pub use repair::{RoundingPolicy, SuggestionRepairer};
pub use synthesis::PlanSynthesizer;

use crate::config::{ConfigError, PlanConfig};
use crate::errors::{AppError, AppResult};
use crate::models::{
    AbsoluteSuggestion, AthleteBaseline, MetricSchema, RangeTable, RelativeSuggestion,
    TrainingPlan,
};

/// Input document of one planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Optional athlete identifier, only used for logging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub athlete_id: Option<String>,
    /// Column layout of `suggestion`
    #[serde(default)]
    pub schema: MetricSchema,
    /// Model output, one row per day
    pub suggestion: RelativeSuggestion,
    /// Dataset range of every metric
    pub range_per_metric: RangeTable,
    /// Athlete baseline of every metric
    pub athlete_data: AthleteBaseline,
}

impl PlanRequest {
    /// Parse a JSON request
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or violates the matrix shape
    pub fn from_json_str(source: &str) -> AppResult<Self> {
        serde_json::from_str(source).map_err(|e| {
            AppError::invalid_input(format!("Invalid plan request: {e}")).with_source(e)
        })
    }

    /// Parse a YAML request
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or violates the matrix shape
    pub fn from_yaml_str(source: &str) -> AppResult<Self> {
        serde_yaml::from_str(source).map_err(|e| {
            AppError::invalid_input(format!("Invalid plan request: {e}")).with_source(e)
        })
    }

    /// Load a request file; `.json` files are parsed as JSON, everything else as YAML
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let source = fs::read_to_string(path).map_err(|e| {
            AppError::not_found(format!("Plan request {}", path.display()))
                .with_details(json!({ "path": path.display().to_string() }))
                .with_source(e)
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_yaml_str(&source)
        }
    }
}

/// Result of every pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    /// Denormalized load before repair
    pub absolute: AbsoluteSuggestion,
    /// Load after rounding, clamping and zone 5 merge
    pub repaired: AbsoluteSuggestion,
    /// Synthesized weekly plan
    pub plan: TrainingPlan,
}

/// Runs the three stages with one validated configuration
#[derive(Debug, Clone)]
pub struct PlanPipeline {
    config: PlanConfig,
    repairer: SuggestionRepairer,
    synthesizer: PlanSynthesizer,
}

impl PlanPipeline {
    /// Create a pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: PlanConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let synthesizer = PlanSynthesizer::new(config.warmup_km, config.cooldown_km)?;
        Ok(Self {
            repairer: SuggestionRepairer::with_rounding(config.rounding),
            synthesizer,
            config,
        })
    }

    /// Configuration the pipeline was built with
    #[must_use]
    pub const fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Run all stages and keep every intermediate result
    ///
    /// # Errors
    ///
    /// Returns an error if the request's metric tables do not match its schema,
    /// or if a series needed for synthesis is missing after repair
    #[instrument(skip_all, fields(athlete_id = request.athlete_id.as_deref().unwrap_or("-")))]
    pub fn run(&self, request: &PlanRequest) -> AppResult<PipelineOutput> {
        let absolute = Denormalizer::new(request.schema.clone()).denormalize(
            &request.suggestion,
            &request.range_per_metric,
            &request.athlete_data,
        )?;
        debug!(metrics = absolute.len(), "Denormalize stage complete");

        let repaired = self.repairer.repair(absolute.clone());
        debug!(
            metrics = repaired.len(),
            rounding = %self.repairer.rounding(),
            "Repair stage complete"
        );

        let plan = self.synthesizer.synthesize(
            &repaired,
            &self.config.intervals,
            &self.config.interval_type,
        )?;

        Ok(PipelineOutput {
            absolute,
            repaired,
            plan,
        })
    }

    /// Run all stages and return only the plan
    ///
    /// # Errors
    ///
    /// See [`PlanPipeline::run`]
    pub fn plan(&self, request: &PlanRequest) -> AppResult<TrainingPlan> {
        self.run(request).map(|output| output.plan)
    }

    /// Plan many requests in parallel, one result per request in input order
    #[must_use]
    pub fn plan_batch(&self, requests: &[PlanRequest]) -> Vec<AppResult<TrainingPlan>> {
        info!(requests = requests.len(), "Planning batch");
        requests
            .par_iter()
            .map(|request| self.plan(request))
            .collect()
    }
}
