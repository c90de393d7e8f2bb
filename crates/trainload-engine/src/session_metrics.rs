// ABOUTME: Session-level TSS/IF computed once from measured averages
// ABOUTME: Sport-specific intensity proxies with a brick power-then-pace fallback
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

//! Session metrics.
//!
//! Computed at session save time from measured averages, not from
//! workout blocks: `IF = measured proxy / threshold proxy`,
//! `TSS = hours x IF² x 100`. Any non-positive threshold or measured
//! average leaves both values unset; an incomplete session is not an
//! error, it simply carries no load.

use serde::{Deserialize, Serialize};
use tracing::debug;
use trainload_core::constants::{
    METERS_PER_KM, SECONDS_PER_HOUR_F64, SWIM_REFERENCE_METERS, TSS_BASE_MULTIPLIER,
};
use trainload_core::{AthleteThresholds, CompletedSession, SportType};

/// Session-level computed load, unset when the inputs cannot support it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetrics {
    /// Training Stress Score, rounded to 1 decimal
    pub tss: Option<f64>,
    /// Intensity Factor, rounded to 3 decimals
    pub intensity_factor: Option<f64>,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn positive(value: Option<u32>) -> Option<f64> {
    value.filter(|v| *v > 0).map(f64::from)
}

fn power_intensity(session: &CompletedSession, thresholds: &AthleteThresholds) -> Option<f64> {
    let ftp = positive(thresholds.ftp)?;
    (session.avg_power > 0.0).then(|| session.avg_power / ftp)
}

fn running_intensity(session: &CompletedSession, thresholds: &AthleteThresholds) -> Option<f64> {
    let pace = positive(thresholds.functional_threshold_pace)?;
    let threshold_speed = METERS_PER_KM / pace;
    (session.avg_speed > 0.0).then(|| session.avg_speed / threshold_speed)
}

fn swim_intensity(session: &CompletedSession, thresholds: &AthleteThresholds) -> Option<f64> {
    let css = positive(thresholds.critical_swim_speed)?;
    let css_speed = SWIM_REFERENCE_METERS / css;
    (session.avg_speed > 0.0).then(|| session.avg_speed / css_speed)
}

/// Compute TSS and IF for a completed session.
///
/// The intensity proxy is avg power over FTP for cycling, avg speed
/// over threshold speed for running, avg speed over CSS speed for
/// swimming. Brick sessions prefer the power proxy and fall back to the
/// running one.
#[must_use]
pub fn compute_session_metrics(
    session: &CompletedSession,
    thresholds: &AthleteThresholds,
) -> SessionMetrics {
    let duration_hours = f64::from(session.total_duration_seconds) / SECONDS_PER_HOUR_F64;
    if duration_hours <= 0.0 {
        return SessionMetrics::default();
    }

    let sport = SportType::from_str_lenient(session.sport_type.as_deref());
    let intensity_factor = match sport {
        SportType::Cycling => power_intensity(session, thresholds),
        SportType::Running => running_intensity(session, thresholds),
        SportType::Swimming => swim_intensity(session, thresholds),
        SportType::Brick => {
            power_intensity(session, thresholds).or_else(|| running_intensity(session, thresholds))
        }
    };

    let Some(intensity_factor) = intensity_factor.filter(|f| *f > 0.0) else {
        debug!(
            session_id = %session.id,
            sport = sport.display_name(),
            "no usable threshold or measured average, leaving session load unset"
        );
        return SessionMetrics::default();
    };

    let tss = duration_hours * intensity_factor * intensity_factor * TSS_BASE_MULTIPLIER;
    SessionMetrics {
        tss: Some(round1(tss)),
        intensity_factor: Some(round3(intensity_factor)),
    }
}
