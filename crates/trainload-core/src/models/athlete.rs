// ABOUTME: Athlete reference thresholds and persisted training-load state
// ABOUTME: Read-only inputs to the engine; mutated via athlete settings elsewhere
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CSS_SEC_PER_100M, DEFAULT_FTP_WATTS, DEFAULT_THRESHOLD_PACE_SEC_PER_KM,
};

use super::zones::ZoneReferenceType;

/// Per-athlete reference values used to scale intensity percentages.
///
/// All fields are optional; the calculators fall back to the documented
/// defaults (FTP 250 W, threshold pace 300 s/km, CSS 120 s/100m) so that
/// an athlete who never filled in settings still gets plausible estimates.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AthleteThresholds {
    /// Functional Threshold Power in watts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ftp: Option<u32>,
    /// Functional threshold pace in seconds per km
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functional_threshold_pace: Option<u32>,
    /// Critical swim speed in seconds per 100 m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_swim_speed: Option<u32>,
    /// 5K race pace in seconds per km
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_5k: Option<u32>,
    /// 10K race pace in seconds per km
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_10k: Option<u32>,
    /// Half-marathon race pace in seconds per km
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_half_marathon: Option<u32>,
    /// Marathon race pace in seconds per km
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_marathon: Option<u32>,
}

fn positive(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v > 0)
}

impl AthleteThresholds {
    /// FTP in watts, defaulted when unset or non-positive
    #[must_use]
    pub fn ftp_or_default(&self) -> u32 {
        positive(self.ftp).unwrap_or(DEFAULT_FTP_WATTS)
    }

    /// Threshold pace in sec/km, defaulted when unset or non-positive
    #[must_use]
    pub fn threshold_pace_or_default(&self) -> u32 {
        positive(self.functional_threshold_pace).unwrap_or(DEFAULT_THRESHOLD_PACE_SEC_PER_KM)
    }

    /// CSS in sec/100m, defaulted when unset or non-positive
    #[must_use]
    pub fn css_or_default(&self) -> u32 {
        positive(self.critical_swim_speed).unwrap_or(DEFAULT_CSS_SEC_PER_100M)
    }

    /// The athlete's number for a zone system's reference metric.
    ///
    /// Returns `None` for reference types the athlete has no value for
    /// (including `VO2MAX_*` and `CUSTOM`, which are coach-defined); the
    /// zone resolver substitutes a neutral reference in that case.
    #[must_use]
    pub fn reference_value(&self, reference: ZoneReferenceType) -> Option<f64> {
        let raw = match reference {
            ZoneReferenceType::Ftp => self.ftp,
            ZoneReferenceType::ThresholdPace => self.functional_threshold_pace,
            ZoneReferenceType::Css => self.critical_swim_speed,
            ZoneReferenceType::Pace5k => self.pace_5k,
            ZoneReferenceType::Pace10k => self.pace_10k,
            ZoneReferenceType::PaceHalfMarathon => self.pace_half_marathon,
            ZoneReferenceType::PaceMarathon => self.pace_marathon,
            ZoneReferenceType::Vo2maxPower
            | ZoneReferenceType::Vo2maxPace
            | ZoneReferenceType::Custom => None,
        };
        positive(raw).map(f64::from)
    }
}

/// Rolling training-load state for one athlete.
///
/// The only cross-call state in the engine: `recompute_load` returns a
/// fresh value and the caller persists it onto the athlete's profile.
/// Single writer per athlete; last writer wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingLoadState {
    /// Chronic Training Load (42-day EMA of daily TSS) - fitness
    pub ctl: f64,
    /// Acute Training Load (7-day EMA of daily TSS) - fatigue
    pub atl: f64,
    /// Training Stress Balance (CTL - ATL) - form
    pub tsb: f64,
}
