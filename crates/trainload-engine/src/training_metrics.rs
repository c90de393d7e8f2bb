// ABOUTME: Workout-level estimate aggregation over block metrics
// ABOUTME: Sums block TSS/duration/distance and derives the aggregate IF
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

//! Training-level estimates.
//!
//! The estimated IF is the normalized-intensity equivalent of the
//! aggregate TSS (`sqrt(tss / (hours x 100))`), not an average of
//! per-block intensities: it reflects the stress actually accumulated.

use serde::{Deserialize, Serialize};
use trainload_core::constants::{SECONDS_PER_HOUR_F64, TSS_BASE_MULTIPLIER};
use trainload_core::{SportType, WorkoutBlock};

use crate::block_metrics::MetricsCalculator;

/// Derived estimates for one training
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrainingMetrics {
    /// Estimated Training Stress Score, rounded to the nearest integer
    pub estimated_tss: u32,
    /// Estimated Intensity Factor, 2 decimals, 0 when there is no duration
    pub estimated_if: f64,
    /// Total estimated duration in seconds
    pub estimated_duration_seconds: u32,
    /// Total estimated distance in meters
    pub estimated_distance: u32,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl MetricsCalculator {
    /// Aggregate all blocks of a training into workout-level estimates.
    ///
    /// An empty block list yields an all-zero result; blocks that cannot
    /// be interpreted contribute zeros individually.
    #[must_use]
    pub fn training_metrics(&self, blocks: &[WorkoutBlock], sport: SportType) -> TrainingMetrics {
        let mut total_tss = 0.0;
        let mut total_duration: u32 = 0;
        let mut total_distance: u32 = 0;

        for block in blocks {
            let metrics = self.block_metrics(block, sport);
            total_tss += metrics.tss;
            total_duration += metrics.duration_seconds;
            total_distance += metrics.distance_meters;
        }

        let estimated_if = if total_duration > 0 {
            let hours = f64::from(total_duration) / SECONDS_PER_HOUR_F64;
            round2((total_tss / (hours * TSS_BASE_MULTIPLIER)).sqrt())
        } else {
            0.0
        };

        TrainingMetrics {
            estimated_tss: total_tss.round() as u32,
            estimated_if,
            estimated_duration_seconds: total_duration,
            estimated_distance: total_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trainload_core::AthleteThresholds;

    #[test]
    fn empty_training_is_all_zero() {
        let calculator = MetricsCalculator::new(AthleteThresholds::default());
        let metrics = calculator.training_metrics(&[], SportType::Cycling);
        assert_eq!(metrics, TrainingMetrics::default());
    }
}
