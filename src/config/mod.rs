// ABOUTME: Planning configuration with warmup/cooldown distances, rounding and interval catalog
// ABOUTME: Loads environment overrides on top of defaults and caches a validated global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All values can be overridden via environment variables with the
//! `TRAINPLAN_` prefix:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TRAINPLAN_WARMUP_KM` | `1.5` |
//! | `TRAINPLAN_COOLDOWN_KM` | `1.5` |
//! | `TRAINPLAN_INTERVAL_TYPE` | `default` |
//! | `TRAINPLAN_ROUNDING` | `ties_even` |
//! | `TRAINPLAN_INTERVALS_FILE` | built-in catalog |

use std::env;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Configuration error types
pub mod error;
/// Interval template catalog
pub mod intervals;

pub use error::ConfigError;
pub use intervals::{IntervalCatalog, IntervalTemplate, RawIntervalTemplate};

use crate::constants::defaults;
use crate::errors::PlanError;
use crate::pipeline::RoundingPolicy;

/// Environment variable overriding the warmup distance
pub const ENV_WARMUP_KM: &str = "TRAINPLAN_WARMUP_KM";
/// Environment variable overriding the maximum cooldown distance
pub const ENV_COOLDOWN_KM: &str = "TRAINPLAN_COOLDOWN_KM";
/// Environment variable selecting the interval template
pub const ENV_INTERVAL_TYPE: &str = "TRAINPLAN_INTERVAL_TYPE";
/// Environment variable selecting the rounding policy
pub const ENV_ROUNDING: &str = "TRAINPLAN_ROUNDING";
/// Environment variable pointing at a YAML or JSON interval catalog
pub const ENV_INTERVALS_FILE: &str = "TRAINPLAN_INTERVALS_FILE";

/// Global configuration singleton
static PLAN_CONFIG: OnceLock<PlanConfig> = OnceLock::new();

/// Settings shared read-only by every planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Warmup distance allocated to every planned day (km)
    pub warmup_km: f64,
    /// Maximum cooldown distance (km)
    pub cooldown_km: f64,
    /// Interval template used for the main set
    pub interval_type: String,
    /// Rounding of count metrics during repair
    pub rounding: RoundingPolicy,
    /// Available interval templates
    pub intervals: IntervalCatalog,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            warmup_km: defaults::WARMUP_KM,
            cooldown_km: defaults::COOLDOWN_KM,
            interval_type: defaults::INTERVAL_TYPE.to_owned(),
            rounding: RoundingPolicy::default(),
            intervals: IntervalCatalog::default(),
        }
    }
}

impl PlanConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLAN_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planning config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values, the
    /// interval catalog cannot be loaded, or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            warmup_km = config.warmup_km,
            cooldown_km = config.cooldown_km,
            interval_type = %config.interval_type,
            rounding = %config.rounding,
            templates = config.intervals.len(),
            "Loaded planning configuration"
        );
        Ok(config)
    }

    /// Replace the interval catalog with one loaded from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn with_intervals_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        self.intervals = IntervalCatalog::from_path(path)?;
        Ok(self)
    }

    /// Select a different interval template
    #[must_use]
    pub fn with_interval_type(mut self, interval_type: impl Into<String>) -> Self {
        self.interval_type = interval_type.into();
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a distance is negative or not finite, or if the
    /// selected interval type has no template in the catalog
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("warmup_km", self.warmup_km),
            ("cooldown_km", self.cooldown_km),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlanError::InvalidDistance { field, value }.into());
            }
        }

        self.intervals.get(&self.interval_type)?;
        Ok(())
    }

    /// Template selected by `interval_type`
    ///
    /// # Errors
    ///
    /// Returns `PlanError::UnknownIntervalType` if the catalog has no such entry
    pub fn interval_template(&self) -> Result<&IntervalTemplate, PlanError> {
        self.intervals.get(&self.interval_type)
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(ENV_WARMUP_KM, &mut self.warmup_km)?;
        Self::apply_env_var(ENV_COOLDOWN_KM, &mut self.cooldown_km)?;
        Self::apply_env_var(ENV_INTERVAL_TYPE, &mut self.interval_type)?;
        Self::apply_env_var(ENV_ROUNDING, &mut self.rounding)?;

        if let Ok(path) = env::var(ENV_INTERVALS_FILE) {
            self = self.with_intervals_file(Path::new(&path))?;
        }

        Ok(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PlanConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rounding, RoundingPolicy::TiesToEven);
        assert!((config.interval_template().unwrap().pair_km() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_interval_type_fails_validation() {
        let config = PlanConfig::default().with_interval_type("hills");
        let error = config.validate().unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Plan(PlanError::UnknownIntervalType { .. })
        ));
    }

    #[test]
    fn test_nan_cooldown_fails_validation() {
        let config = PlanConfig {
            cooldown_km: f64::NAN,
            ..PlanConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Plan(PlanError::InvalidDistance {
                field: "cooldown_km",
                ..
            }))
        ));
    }
}
