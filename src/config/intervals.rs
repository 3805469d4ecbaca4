// ABOUTME: Interval template catalog mapping interval types to effort/recovery segment pairs
// ABOUTME: Loads YAML or JSON catalogs and rejects templates that cannot bound interval packing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Interval Template Catalog
//!
//! A catalog file keeps the `{effort: {zone: km}, recovery: {zone: km}}`
//! layout used by the planning tools:
//!
//! ```yaml
//! default:
//!   effort:
//!     Z5: 1.0
//!   recovery:
//!     Z2: 1.0
//! ```
//!
//! Every template holds exactly one effort and one recovery segment, each
//! with a finite distance greater than zero. Interval packing subtracts the
//! effort distance from the zone 5 budget on every iteration, so a zero
//! effort would never exhaust it.

use std::collections::btree_map::{self, BTreeMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::constants::{defaults, zones};
use crate::errors::PlanError;
use crate::models::ZoneDistance;

/// One repeatable work unit: an effort segment followed by a recovery segment
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTemplate {
    effort: ZoneDistance,
    recovery: ZoneDistance,
}

impl IntervalTemplate {
    /// Create a template
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidTemplate` if either distance is not a finite value > 0
    pub fn new(
        name: &str,
        effort: ZoneDistance,
        recovery: ZoneDistance,
    ) -> Result<Self, PlanError> {
        for (role, segment) in [("effort", &effort), ("recovery", &recovery)] {
            if !segment.km.is_finite() || segment.km <= 0.0 {
                return Err(PlanError::invalid_template(
                    name,
                    format!(
                        "{role} distance for zone {} must be > 0 km, got {}",
                        segment.zone, segment.km
                    ),
                ));
            }
        }
        Ok(Self { effort, recovery })
    }

    /// Effort segment
    #[must_use]
    pub const fn effort(&self) -> &ZoneDistance {
        &self.effort
    }

    /// Recovery segment
    #[must_use]
    pub const fn recovery(&self) -> &ZoneDistance {
        &self.recovery
    }

    /// Distance of one effort + recovery pair
    #[must_use]
    pub fn pair_km(&self) -> f64 {
        self.effort.km + self.recovery.km
    }

    fn from_raw(name: &str, raw: RawIntervalTemplate) -> Result<Self, PlanError> {
        let effort = single_segment(name, "effort", raw.effort)?;
        let recovery = single_segment(name, "recovery", raw.recovery)?;
        Self::new(name, effort, recovery)
    }
}

fn single_segment(
    name: &str,
    role: &str,
    segments: BTreeMap<String, f64>,
) -> Result<ZoneDistance, PlanError> {
    let count = segments.len();
    let mut entries = segments.into_iter();
    match (entries.next(), count) {
        (Some((zone, km)), 1) => Ok(ZoneDistance::new(zone, km)),
        _ => Err(PlanError::invalid_template(
            name,
            format!("expected exactly one {role} segment, found {count}"),
        )),
    }
}

/// Serialized form of a template, validated into [`IntervalTemplate`] on load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawIntervalTemplate {
    /// Effort segments by zone label
    pub effort: BTreeMap<String, f64>,
    /// Recovery segments by zone label
    pub recovery: BTreeMap<String, f64>,
}

impl From<IntervalTemplate> for RawIntervalTemplate {
    fn from(template: IntervalTemplate) -> Self {
        Self {
            effort: BTreeMap::from([(template.effort.zone, template.effort.km)]),
            recovery: BTreeMap::from([(template.recovery.zone, template.recovery.km)]),
        }
    }
}

/// Interval templates keyed by interval type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, RawIntervalTemplate>",
    into = "BTreeMap<String, RawIntervalTemplate>"
)]
pub struct IntervalCatalog {
    templates: BTreeMap<String, IntervalTemplate>,
}

impl IntervalCatalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Template for an interval type
    ///
    /// # Errors
    ///
    /// Returns `PlanError::UnknownIntervalType` if the catalog has no such entry
    pub fn get(&self, interval_type: &str) -> Result<&IntervalTemplate, PlanError> {
        self.templates
            .get(interval_type)
            .ok_or_else(|| PlanError::UnknownIntervalType {
                interval_type: interval_type.to_owned(),
            })
    }

    /// Add or replace a template
    pub fn insert(&mut self, interval_type: impl Into<String>, template: IntervalTemplate) {
        self.templates.insert(interval_type.into(), template);
    }

    /// Whether the catalog has a template for `interval_type`
    #[must_use]
    pub fn contains(&self, interval_type: &str) -> bool {
        self.templates.contains_key(interval_type)
    }

    /// Number of templates
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over templates in name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, IntervalTemplate> {
        self.templates.iter()
    }

    /// Parse a YAML catalog
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Catalog` if the document is malformed or a template is invalid
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(source).map_err(|e| ConfigError::Catalog {
            origin: "inline YAML".to_owned(),
            reason: e.to_string(),
        })
    }

    /// Parse a JSON catalog
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Catalog` if the document is malformed or a template is invalid
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::Catalog {
            origin: "inline JSON".to_owned(),
            reason: e.to_string(),
        })
    }

    /// Load a catalog file; `.json` files are parsed as JSON, everything else as YAML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Catalog` if it cannot be parsed
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_yaml_str(&source)
        };
        parsed.map_err(|error| match error {
            ConfigError::Catalog { reason, .. } => ConfigError::Catalog {
                origin: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }
}

impl Default for IntervalCatalog {
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(
            defaults::INTERVAL_TYPE,
            IntervalTemplate {
                effort: ZoneDistance::new(zones::Z5, defaults::INTERVAL_EFFORT_KM),
                recovery: ZoneDistance::new(zones::Z2, defaults::INTERVAL_RECOVERY_KM),
            },
        );
        catalog
    }
}

impl TryFrom<BTreeMap<String, RawIntervalTemplate>> for IntervalCatalog {
    type Error = PlanError;

    fn try_from(raw: BTreeMap<String, RawIntervalTemplate>) -> Result<Self, Self::Error> {
        let templates = raw
            .into_iter()
            .map(|(name, template)| {
                let parsed = IntervalTemplate::from_raw(&name, template)?;
                Ok((name, parsed))
            })
            .collect::<Result<_, PlanError>>()?;
        Ok(Self { templates })
    }
}

impl From<IntervalCatalog> for BTreeMap<String, RawIntervalTemplate> {
    fn from(catalog: IntervalCatalog) -> Self {
        catalog
            .templates
            .into_iter()
            .map(|(name, template)| (name, template.into()))
            .collect()
    }
}
