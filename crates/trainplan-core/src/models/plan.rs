// ABOUTME: Weekly training plan structure with running sessions, strength and cross-training
// ABOUTME: Serializes to the day_N / session_1 / interval_N layout consumed downstream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training plan model.
//!
//! A plan is sparse: a day that was not planned has no entry at all, which is
//! different from a day planned with zero volume. Interval numbering is
//! derived from position in the main set, so it always starts at 1 and has no
//! gaps.

use std::collections::btree_map::{self, BTreeMap};

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::constants::plan_keys::{DAY_PREFIX, INTERVAL_PREFIX, SESSION_KEY};

/// A distance run in one training zone, serialized as `{zone: km}`
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDistance {
    /// Zone label (e.g. `Z2`)
    pub zone: String,
    /// Distance in km
    pub km: f64,
}

impl ZoneDistance {
    /// Create a segment
    #[must_use]
    pub fn new(zone: impl Into<String>, km: f64) -> Self {
        Self {
            zone: zone.into(),
            km,
        }
    }
}

impl Serialize for ZoneDistance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.zone, &self.km)?;
        map.end()
    }
}

/// One effort segment followed by one recovery segment
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    /// Work segment
    pub effort: ZoneDistance,
    /// Recovery segment run after the effort
    pub recovery: ZoneDistance,
}

impl Interval {
    /// Combined distance of effort and recovery
    #[must_use]
    pub fn km(&self) -> f64 {
        self.effort.km + self.recovery.km
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.effort, &self.recovery).serialize(serializer)
    }
}

/// The running session of a day
#[derive(Debug, Clone, PartialEq)]
pub struct RunningSession {
    /// Easy warmup block
    pub warmup: ZoneDistance,
    /// Main set, possibly empty
    pub main: Vec<Interval>,
    /// Easy cooldown block, absent when no distance remained after warmup
    pub cooldown: Option<ZoneDistance>,
}

impl RunningSession {
    /// Total running distance of the session
    #[must_use]
    pub fn km(&self) -> f64 {
        self.warmup.km
            + self.main.iter().map(Interval::km).sum::<f64>()
            + self.cooldown.as_ref().map_or(0.0, |cooldown| cooldown.km)
    }
}

struct SessionBody<'a>(&'a RunningSession);

struct MainSet<'a>(&'a [Interval]);

impl Serialize for MainSet<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, interval) in self.0.iter().enumerate() {
            map.serialize_entry(&format!("{INTERVAL_PREFIX}{}", index + 1), interval)?;
        }
        map.end()
    }
}

impl Serialize for SessionBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let session = self.0;
        let entries = if session.cooldown.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(entries))?;
        map.serialize_entry("warmup", &session.warmup)?;
        map.serialize_entry("main", &MainSet(&session.main))?;
        if let Some(cooldown) = &session.cooldown {
            map.serialize_entry("cooldown", cooldown)?;
        }
        map.end()
    }
}

impl Serialize for RunningSession {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(SESSION_KEY, &SessionBody(self))?;
        map.end()
    }
}

/// Everything planned for one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    /// Running session
    pub running: RunningSession,
    /// Strength training sessions
    pub strength: f64,
    /// Cross-training hours
    pub alternative: f64,
}

/// Sparse mapping from day number (1..=7) to that day's plan
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingPlan {
    days: BTreeMap<u8, DayPlan>,
}

impl TrainingPlan {
    /// Create an empty plan
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plan of a day (1-based), returning the previous one
    pub fn insert(&mut self, day: u8, plan: DayPlan) -> Option<DayPlan> {
        self.days.insert(day, plan)
    }

    /// Plan of a day (1-based), `None` if the day was skipped
    #[must_use]
    pub fn day(&self, day: u8) -> Option<&DayPlan> {
        self.days.get(&day)
    }

    /// Whether the day (1-based) was planned
    #[must_use]
    pub fn contains_day(&self, day: u8) -> bool {
        self.days.contains_key(&day)
    }

    /// Planned day numbers in ascending order
    pub fn planned_days(&self) -> impl Iterator<Item = u8> + '_ {
        self.days.keys().copied()
    }

    /// Number of planned days
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no day was planned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterate over planned days in ascending order
    pub fn iter(&self) -> btree_map::Iter<'_, u8, DayPlan> {
        self.days.iter()
    }

    /// Number of intervals across the week
    #[must_use]
    pub fn total_intervals(&self) -> usize {
        self.days.values().map(|day| day.running.main.len()).sum()
    }

    /// Running distance across the week
    #[must_use]
    pub fn total_running_km(&self) -> f64 {
        self.days.values().map(|day| day.running.km()).sum()
    }

    /// Serialized key of a day number
    #[must_use]
    pub fn day_key(day: u8) -> String {
        format!("{DAY_PREFIX}{day}")
    }
}

impl Serialize for TrainingPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, plan) in &self.days {
            map.serialize_entry(&Self::day_key(*day), plan)?;
        }
        map.end()
    }
}
