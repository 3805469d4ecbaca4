// ABOUTME: Builds the weekly training plan from repaired absolute load
// ABOUTME: Allocates warmup and cooldown then greedily packs effort/recovery intervals per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Synthesis
//!
//! Each day is planned independently from four daily series: `total km`,
//! `km Z5`, `strength training` and `hours alternative`.
//!
//! 1. A day whose total distance is below the warmup distance gets no entry
//! 2. Warmup is allocated in full, cooldown is capped by what remains
//! 3. Intervals are packed while the zone 5 budget covers one more effort
//!    and the remaining distance covers one more effort plus recovery
//!
//! The packing loop subtracts the effort distance from the zone 5 budget on
//! every pass, which is why templates with a non-positive effort are refused
//! when the catalog is loaded. Infinite or NaN distances are refused before
//! any day is planned, and a day whose budgets admit more than
//! [`MAX_INTERVALS_PER_SESSION`] pairs fails instead of being packed.

use tracing::{debug, info, instrument};

use crate::config::{IntervalCatalog, IntervalTemplate};
use crate::constants::metrics::{HOURS_ALTERNATIVE, KM_Z5, STRENGTH_TRAINING, TOTAL_KM};
use crate::constants::limits::MAX_INTERVALS_PER_SESSION;
use crate::constants::{defaults, zones, DAYS_PER_WEEK};
use crate::errors::PlanError;
use crate::models::{
    AbsoluteSuggestion, DayPlan, Interval, RunningSession, TrainingPlan, ZoneDistance,
};

/// Turns repaired daily load into running sessions with strength and cross-training
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanSynthesizer {
    warmup_km: f64,
    cooldown_km: f64,
}

impl Default for PlanSynthesizer {
    fn default() -> Self {
        Self {
            warmup_km: defaults::WARMUP_KM,
            cooldown_km: defaults::COOLDOWN_KM,
        }
    }
}

impl PlanSynthesizer {
    /// Create a synthesizer with explicit warmup and cooldown distances
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidDistance` if either distance is negative or not finite
    pub fn new(warmup_km: f64, cooldown_km: f64) -> Result<Self, PlanError> {
        validate_distance("warmup_km", warmup_km)?;
        validate_distance("cooldown_km", cooldown_km)?;
        Ok(Self {
            warmup_km,
            cooldown_km,
        })
    }

    /// Warmup distance in km
    #[must_use]
    pub const fn warmup_km(&self) -> f64 {
        self.warmup_km
    }

    /// Maximum cooldown distance in km
    #[must_use]
    pub const fn cooldown_km(&self) -> f64 {
        self.cooldown_km
    }

    /// Synthesize the weekly plan
    ///
    /// The template and all four input series are resolved before any day is
    /// planned, so configuration and input problems surface even when every
    /// day would be skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the catalog has no template for `interval_type` (`UnknownIntervalType`)
    /// - a required series is missing from `suggestion` (`MetricNotFound`)
    /// - a `total km` or `km Z5` value is infinite or NaN (`NonFiniteLoad`)
    /// - a day would pack more than the per-session limit (`TooManyIntervals`)
    #[instrument(
        level = "debug",
        skip(self, suggestion, catalog),
        fields(warmup_km = self.warmup_km, cooldown_km = self.cooldown_km)
    )]
    pub fn synthesize(
        &self,
        suggestion: &AbsoluteSuggestion,
        catalog: &IntervalCatalog,
        interval_type: &str,
    ) -> Result<TrainingPlan, PlanError> {
        let template = catalog.get(interval_type)?;
        let total_km = suggestion.series(TOTAL_KM)?;
        let zone5_km = suggestion.series(KM_Z5)?;
        let strength = suggestion.series(STRENGTH_TRAINING)?;
        let alternative = suggestion.series(HOURS_ALTERNATIVE)?;
        ensure_finite(TOTAL_KM, total_km)?;
        ensure_finite(KM_Z5, zone5_km)?;

        let mut plan = TrainingPlan::new();
        for (index, ((&day_total, &day_zone5), (&day_strength, &day_alternative))) in total_km
            .iter()
            .zip(zone5_km)
            .zip(strength.iter().zip(alternative))
            .enumerate()
        {
            let day = (index + 1) as u8;
            let Some(running) = self.plan_running(day, day_total, day_zone5, template)? else {
                debug!(day, total_km = day_total, "Skipping day below warmup distance");
                continue;
            };
            plan.insert(
                day,
                DayPlan {
                    running,
                    strength: day_strength,
                    alternative: day_alternative,
                },
            );
        }

        info!(
            interval_type,
            planned_days = plan.len(),
            skipped_days = total_km.len() - plan.len(),
            intervals = plan.total_intervals(),
            "Synthesized training plan"
        );
        Ok(plan)
    }

    /// Running session of one day, `None` when the day is skipped
    fn plan_running(
        &self,
        day: u8,
        total_km: f64,
        zone5_km: f64,
        template: &IntervalTemplate,
    ) -> Result<Option<RunningSession>, PlanError> {
        if total_km < self.warmup_km {
            return Ok(None);
        }

        let mut remaining_km = total_km - self.warmup_km;
        let warmup = ZoneDistance::new(zones::Z2, self.warmup_km);

        let cooldown = if remaining_km > 0.0 {
            let cooldown_km = self.cooldown_km.min(remaining_km);
            remaining_km -= cooldown_km;
            Some(ZoneDistance::new(zones::Z2, cooldown_km))
        } else {
            None
        };

        let effort_km = template.effort().km;
        let pair_km = template.pair_km();

        // Both budgets shrink by a fixed step, so the pass count is known up front
        let count = (zone5_km / effort_km).min(remaining_km / pair_km).floor();
        if count > MAX_INTERVALS_PER_SESSION as f64 {
            return Err(PlanError::TooManyIntervals {
                day,
                count,
                limit: MAX_INTERVALS_PER_SESSION,
            });
        }

        let mut remaining_zone5_km = zone5_km;
        let mut main = Vec::new();
        while remaining_zone5_km >= effort_km && remaining_km >= pair_km {
            main.push(Interval {
                effort: template.effort().clone(),
                recovery: template.recovery().clone(),
            });
            remaining_km -= pair_km;
            remaining_zone5_km -= effort_km;
        }

        Ok(Some(RunningSession {
            warmup,
            main,
            cooldown,
        }))
    }
}

fn ensure_finite(metric: &str, series: &[f64; DAYS_PER_WEEK]) -> Result<(), PlanError> {
    match series
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite())
    {
        Some((index, &value)) => Err(PlanError::NonFiniteLoad {
            metric: metric.to_owned(),
            day: (index + 1) as u8,
            value,
        }),
        None => Ok(()),
    }
}

fn validate_distance(field: &'static str, value: f64) -> Result<(), PlanError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidDistance { field, value })
    }
}
