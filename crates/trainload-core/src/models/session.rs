// ABOUTME: Completed session model - one realized workout occurrence
// ABOUTME: TSS/IF are computed once at save time from measured averages
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A realized workout with measured averages.
///
/// Created once when an athlete finishes a workout. `tss` and
/// `intensity_factor` are computed from the measured averages at that
/// moment and never recomputed retroactively except by explicit
/// recompute; the PMC walk consumes them as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedSession {
    /// Unique id
    pub id: String,
    /// Athlete who completed the session
    pub user_id: String,
    /// Training this session executed, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_id: Option<String>,
    /// Display title
    pub title: String,
    /// When the session finished
    pub completed_at: DateTime<Utc>,
    /// Measured total duration in seconds
    pub total_duration_seconds: u32,
    /// Average power in watts (0 when not measured)
    pub avg_power: f64,
    /// Average speed in m/s (0 when not measured)
    pub avg_speed: f64,
    /// Average heart rate in bpm (0 when not measured)
    pub avg_hr: f64,
    /// Average cadence (0 when not measured)
    pub avg_cadence: f64,
    /// Sport as a free string, parsed leniently
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport_type: Option<String>,
    /// Training Stress Score, 1 decimal, set once at save time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tss: Option<f64>,
    /// Intensity Factor, 3 decimals, set once at save time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity_factor: Option<f64>,
}

impl CompletedSession {
    /// Create a session shell with measured fields zeroed
    #[must_use]
    pub fn new(user_id: impl Into<String>, completed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            training_id: None,
            title: String::new(),
            completed_at,
            total_duration_seconds: 0,
            avg_power: 0.0,
            avg_speed: 0.0,
            avg_hr: 0.0,
            avg_cadence: 0.0,
            sport_type: None,
            tss: None,
            intensity_factor: None,
        }
    }
}
