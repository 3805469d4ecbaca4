// ABOUTME: Constants for metric names, training zones and planning defaults
// ABOUTME: Shared by the denormalization, repair and plan synthesis stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain: metric names emitted by the upstream
//! model, training zone labels, and planning defaults.

/// Number of days covered by one suggestion and one plan
pub const DAYS_PER_WEEK: usize = 7;

/// Metric names as emitted by the load forecasting model
pub mod metrics {
    /// Number of running sessions per day
    pub const NR_SESSIONS: &str = "nr. sessions";
    /// Total running distance per day (km)
    pub const TOTAL_KM: &str = "total km";
    /// Distance in zones 3-4 (km)
    pub const KM_Z3_4: &str = "km Z3-4";
    /// Distance in zone 5 and threshold efforts T1/T2 (km)
    pub const KM_Z5_T1_T2: &str = "km Z5-T1-T2";
    /// Sprinting distance (km)
    pub const KM_SPRINTING: &str = "km sprinting";
    /// Merged zone 5 distance produced by the repair stage (km)
    pub const KM_Z5: &str = "km Z5";
    /// Strength training sessions per day
    pub const STRENGTH_TRAINING: &str = "strength training";
    /// Cross-training hours per day
    pub const HOURS_ALTERNATIVE: &str = "hours alternative";

    /// Column order of the standard model output
    pub const STANDARD_ORDER: [&str; 7] = [
        NR_SESSIONS,
        TOTAL_KM,
        KM_Z3_4,
        KM_Z5_T1_T2,
        KM_SPRINTING,
        STRENGTH_TRAINING,
        HOURS_ALTERNATIVE,
    ];

    /// Metrics reported as whole counts after repair
    pub const INTEGRAL: [&str; 2] = [NR_SESSIONS, STRENGTH_TRAINING];
}

/// Training intensity zone labels
pub mod zones {
    /// Easy aerobic zone used for warmup, cooldown and recovery
    pub const Z2: &str = "Z2";
    /// Maximal effort zone
    pub const Z5: &str = "Z5";
}

/// Planning defaults
pub mod defaults {
    /// Default warmup distance (km)
    pub const WARMUP_KM: f64 = 1.5;
    /// Default cooldown distance (km)
    pub const COOLDOWN_KM: f64 = 1.5;
    /// Interval template used when none is configured
    pub const INTERVAL_TYPE: &str = "default";
    /// Effort distance of the built-in interval template (km)
    pub const INTERVAL_EFFORT_KM: f64 = 1.0;
    /// Recovery distance of the built-in interval template (km)
    pub const INTERVAL_RECOVERY_KM: f64 = 1.0;
}

/// Bounds on plan synthesis
pub mod limits {
    /// Most effort/recovery pairs packed into one running session
    pub const MAX_INTERVALS_PER_SESSION: usize = 500;
}

/// Serialized key prefixes of the plan structure
pub mod plan_keys {
    /// Prefix of day keys (`day_1` .. `day_7`)
    pub const DAY_PREFIX: &str = "day_";
    /// Prefix of interval keys inside a main set
    pub const INTERVAL_PREFIX: &str = "interval_";
    /// Key of the single running session of a day
    pub const SESSION_KEY: &str = "session_1";
}
