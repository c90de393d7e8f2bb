// ABOUTME: Per-block metrics calculation - effective intensity, speed models, TSS
// ABOUTME: Derives the missing time/space dimension from sport-specific speed models
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

//! Block-level metrics.
//!
//! One workout block plus an athlete's thresholds yields the block's
//! effective intensity (percent of reference), whichever of duration or
//! distance was not authored, and its TSS contribution. All paths are
//! total: a block that cannot be interpreted contributes zeros.

use tracing::debug;
use trainload_core::constants::{
    CYCLING_SPEED_COEFFICIENT, METERS_PER_KM, SECONDS_PER_HOUR_F64, SWIM_REFERENCE_METERS,
    TSS_BASE_MULTIPLIER,
};
use trainload_core::{AthleteThresholds, SportType, WorkoutBlock};

/// Computed metrics for a single workout block
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlockMetrics {
    /// Effective intensity as a 0-100+ percentage of the sport reference
    pub intensity_percent: f64,
    /// Block duration in seconds (authored or derived)
    pub duration_seconds: u32,
    /// Block distance in meters (authored or derived)
    pub distance_meters: u32,
    /// TSS contribution of this block
    pub tss: f64,
}

/// Calculator for block- and training-level workout estimates.
///
/// Holds the athlete's reference thresholds; absent or non-positive
/// values fall back to the documented defaults so estimation never fails.
#[derive(Debug, Clone, Default)]
pub struct MetricsCalculator {
    thresholds: AthleteThresholds,
}

impl MetricsCalculator {
    /// Create a calculator over an athlete's thresholds
    #[must_use]
    pub const fn new(thresholds: AthleteThresholds) -> Self {
        Self { thresholds }
    }

    /// The thresholds this calculator scales intensities against
    #[must_use]
    pub const fn thresholds(&self) -> &AthleteThresholds {
        &self.thresholds
    }

    /// Effective sport for one block of a training.
    ///
    /// Brick trainings mix sports, so the block's populated target fields
    /// decide: power fields mean cycling, pace fields mean running, swim
    /// pace means swimming, and an ambiguous block rides.
    #[must_use]
    pub fn effective_sport(block: &WorkoutBlock, sport: SportType) -> SportType {
        if sport != SportType::Brick {
            return sport;
        }
        if block.power_target_percent.is_some() || block.power_start_percent.is_some() {
            SportType::Cycling
        } else if block.pace_target_seconds_per_km.is_some()
            || block.pace_start_seconds_per_km.is_some()
        {
            SportType::Running
        } else if block.swim_pace_per_100m.is_some() {
            SportType::Swimming
        } else {
            SportType::Cycling
        }
    }

    /// Effective intensity of a block as a 0-100+ percentage.
    ///
    /// Resolution order: unified ramp average, unified target, then the
    /// sport-specific explicit target converted to percent-of-reference.
    /// A block with no positive intensity anywhere is a pause and scores 0.
    #[must_use]
    pub fn block_intensity(&self, block: &WorkoutBlock, effective_sport: SportType) -> f64 {
        if block.has_ramp_intensity() {
            // has_ramp_intensity holds: both bounds are set and positive
            let start = block.intensity_start.unwrap_or(0);
            let end = block.intensity_end.unwrap_or(0);
            return f64::from(start + end) / 2.0;
        }
        if let Some(target) = block.intensity_target.filter(|t| *t > 0) {
            return f64::from(target);
        }
        self.explicit_field_intensity(block, effective_sport)
    }

    /// Percent-of-reference intensity from the per-sport explicit fields.
    ///
    /// Pace targets invert: running 270 s/km against a 300 s/km threshold
    /// is 300/270 = 111% intensity.
    fn explicit_field_intensity(&self, block: &WorkoutBlock, effective_sport: SportType) -> f64 {
        match effective_sport {
            SportType::Running => {
                let threshold = f64::from(self.thresholds.threshold_pace_or_default());
                if let Some(pace) = block.pace_target_seconds_per_km.filter(|p| *p > 0) {
                    return threshold / f64::from(pace) * 100.0;
                }
                if let (Some(start), Some(end)) = (
                    block.pace_start_seconds_per_km.filter(|p| *p > 0),
                    block.pace_end_seconds_per_km.filter(|p| *p > 0),
                ) {
                    let avg_pace = f64::from(start + end) / 2.0;
                    return threshold / avg_pace * 100.0;
                }
                0.0
            }
            SportType::Swimming => {
                let css = f64::from(self.thresholds.css_or_default());
                block
                    .swim_pace_per_100m
                    .filter(|p| *p > 0)
                    .map_or(0.0, |pace| css / f64::from(pace) * 100.0)
            }
            SportType::Cycling | SportType::Brick => {
                if let Some(power) = block.power_target_percent.filter(|p| *p > 0) {
                    return f64::from(power);
                }
                if let (Some(start), Some(end)) = (
                    block.power_start_percent.filter(|p| *p > 0),
                    block.power_end_percent.filter(|p| *p > 0),
                ) {
                    return f64::from(start + end) / 2.0;
                }
                0.0
            }
        }
    }

    /// Speed in m/s for a sport at a given intensity percentage.
    ///
    /// Running and swimming scale the athlete's threshold speed linearly.
    /// Cycling uses the empirical `8.33 x sqrt(intensity/100)` heuristic
    /// carried over from the original estimator; it is an estimation
    /// constant, not a physical model.
    fn speed_mps(&self, effective_sport: SportType, intensity_percent: f64) -> f64 {
        if intensity_percent <= 0.0 {
            return 0.0;
        }
        match effective_sport {
            SportType::Running => {
                let threshold = f64::from(self.thresholds.threshold_pace_or_default());
                (METERS_PER_KM / threshold) * (intensity_percent / 100.0)
            }
            SportType::Swimming => {
                let css = f64::from(self.thresholds.css_or_default());
                (SWIM_REFERENCE_METERS / css) * (intensity_percent / 100.0)
            }
            SportType::Cycling | SportType::Brick => {
                CYCLING_SPEED_COEFFICIENT * (intensity_percent / 100.0).sqrt()
            }
        }
    }

    /// Compute the full metrics for one block of a training.
    ///
    /// A block with neither duration nor distance is excluded from
    /// totals and contributes all zeros. Zero intensity zeroes the TSS
    /// term but an authored duration still counts toward total time.
    #[must_use]
    pub fn block_metrics(&self, block: &WorkoutBlock, sport: SportType) -> BlockMetrics {
        let effective_sport = Self::effective_sport(block, sport);
        let intensity_percent = self.block_intensity(block, effective_sport);
        let speed = self.speed_mps(effective_sport, intensity_percent);

        let (duration_seconds, distance_meters) = if let Some(duration) =
            block.duration_seconds.filter(|d| *d > 0)
        {
            let distance = (f64::from(duration) * speed).round() as u32;
            (duration, distance)
        } else if let Some(distance) = block.distance_meters.filter(|d| *d > 0) {
            let duration = if speed > 0.0 {
                (f64::from(distance) / speed).round() as u32
            } else {
                0
            };
            (duration, distance)
        } else {
            debug!(
                label = %block.label,
                "block has neither duration nor distance, excluding from totals"
            );
            return BlockMetrics::default();
        };

        let tss = if intensity_percent > 0.0 {
            let hours = f64::from(duration_seconds) / SECONDS_PER_HOUR_F64;
            let fraction = intensity_percent / 100.0;
            hours * fraction * fraction * TSS_BASE_MULTIPLIER
        } else {
            0.0
        };

        BlockMetrics {
            intensity_percent,
            duration_seconds,
            distance_meters,
            tss,
        }
    }
}
