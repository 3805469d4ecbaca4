// ABOUTME: Post-processing of absolute training load into physically consistent values
// ABOUTME: Rounds count metrics, clamps negatives to zero and merges zone 5 metrics into km Z5
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::constants::metrics::{INTEGRAL, KM_SPRINTING, KM_Z5, KM_Z5_T1_T2};
use crate::constants::DAYS_PER_WEEK;
use crate::errors::AppError;
use crate::models::{AbsoluteSuggestion, DailyValues};

/// How count metrics are rounded to whole numbers
///
/// The policies only differ at exact `.5` boundaries:
///
/// | value | `TiesToEven` | `TiesAwayFromZero` |
/// |-------|--------------|--------------------|
/// | 0.5   | 0            | 1                  |
/// | 1.5   | 2            | 2                  |
/// | 2.5   | 2            | 3                  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundingPolicy {
    /// Banker's rounding, the behaviour of the upstream planning scripts
    #[default]
    #[serde(rename = "ties_even")]
    TiesToEven,
    /// Round half away from zero (`f64::round`)
    #[serde(rename = "away_from_zero")]
    TiesAwayFromZero,
}

impl RoundingPolicy {
    /// Round a value to a whole number
    #[must_use]
    pub fn round(self, value: f64) -> f64 {
        match self {
            Self::TiesToEven => value.round_ties_even(),
            Self::TiesAwayFromZero => value.round(),
        }
    }

    /// Configuration name of the policy
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TiesToEven => "ties_even",
            Self::TiesAwayFromZero => "away_from_zero",
        }
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ties_even" | "ties_to_even" | "bankers" => Ok(Self::TiesToEven),
            "away_from_zero" | "ties_away_from_zero" | "half_up" => Ok(Self::TiesAwayFromZero),
            other => Err(AppError::invalid_input(format!(
                "Unknown rounding policy: '{other}'. Valid options: ties_even, away_from_zero"
            ))),
        }
    }
}

/// Enforces domain constraints on denormalized load
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionRepairer {
    rounding: RoundingPolicy,
}

impl SuggestionRepairer {
    /// Create a repairer with the default rounding policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repairer with a specific rounding policy
    #[must_use]
    pub const fn with_rounding(rounding: RoundingPolicy) -> Self {
        Self { rounding }
    }

    /// Rounding policy applied to count metrics
    #[must_use]
    pub const fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    /// Repair a suggestion in place and return it.
    ///
    /// 1. `nr. sessions` and `strength training` are rounded to whole numbers
    /// 2. every value is clamped to `>= 0` (NaN becomes 0)
    /// 3. `km Z5-T1-T2` and `km sprinting` are summed day by day into `km Z5`
    ///    and removed; if either is missing the merge is skipped
    ///
    /// Running it again on repaired data changes nothing.
    #[instrument(level = "debug", skip_all, fields(metrics = suggestion.len()))]
    pub fn repair(&self, mut suggestion: AbsoluteSuggestion) -> AbsoluteSuggestion {
        for (metric, values) in suggestion.iter_mut() {
            if INTEGRAL.contains(&metric.as_str()) {
                for value in values.iter_mut() {
                    *value = self.rounding.round(*value);
                }
            }
            for value in values.iter_mut() {
                *value = clamp_non_negative(*value);
            }
        }

        Self::merge_zone5(&mut suggestion);
        suggestion
    }

    fn merge_zone5(suggestion: &mut AbsoluteSuggestion) {
        if !(suggestion.contains(KM_Z5_T1_T2) && suggestion.contains(KM_SPRINTING)) {
            debug!(
                has_z5_t1_t2 = suggestion.contains(KM_Z5_T1_T2),
                has_sprinting = suggestion.contains(KM_SPRINTING),
                "Skipping zone 5 merge"
            );
            return;
        }

        let (Some(threshold), Some(sprinting)) = (
            suggestion.remove(KM_Z5_T1_T2),
            suggestion.remove(KM_SPRINTING),
        ) else {
            return;
        };

        let mut merged: DailyValues = [0.0; DAYS_PER_WEEK];
        for ((total, a), b) in merged.iter_mut().zip(threshold).zip(sprinting) {
            *total = a + b;
        }
        debug!(metric = KM_Z5, "Merged zone 5 threshold and sprint distance");
        suggestion.insert(KM_Z5, merged);
    }
}

/// Values that are not strictly positive (including `-0.0` and NaN) become `0.0`
fn clamp_non_negative(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}
