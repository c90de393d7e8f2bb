// ABOUTME: Workout block model - one typed segment of a training
// ABOUTME: Unified percent-of-reference intensity plus per-sport explicit targets
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

use serde::{Deserialize, Serialize};

use super::sport::SportType;

/// Type of a workout block
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    /// Warm-up segment
    Warmup,
    /// Repeated work segment
    Interval,
    /// Steady effort at a single intensity
    #[default]
    Steady,
    /// Linear intensity ramp between start and end targets
    Ramp,
    /// Cool-down segment
    Cooldown,
    /// Unstructured effort
    Free,
    /// Rest segment, zero intensity
    Pause,
}

/// One segment of a workout.
///
/// Exactly one of `duration_seconds` / `distance_meters` is authoritative;
/// the engine derives the other from the sport's speed model. Intensity is
/// expressed either through the unified percent-of-reference fields
/// (`intensity_target` or the `intensity_start`/`intensity_end` ramp pair)
/// or through a sport-specific explicit target. Explicit targets are what
/// the zone resolver writes and what workout authors set by hand; they
/// always win over zone-derived values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutBlock {
    /// Block type
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Duration in seconds, if time is authoritative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    /// Distance in meters, if distance is authoritative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<u32>,
    /// Display label (e.g. "Hard", "Recovery")
    pub label: String,
    /// Zone label to resolve against a coach's zone system (e.g. "Z4")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_label: Option<String>,
    /// Specific zone system to resolve against, overriding coach lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_system_id: Option<String>,

    /// Target intensity as percent of the sport reference (90 = 90%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity_target: Option<u32>,
    /// Ramp start intensity as percent of reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity_start: Option<u32>,
    /// Ramp end intensity as percent of reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity_end: Option<u32>,

    /// Explicit cycling power target as percent of FTP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_target_percent: Option<u32>,
    /// Explicit cycling ramp start as percent of FTP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_start_percent: Option<u32>,
    /// Explicit cycling ramp end as percent of FTP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_end_percent: Option<u32>,

    /// Explicit running pace target in seconds per km
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_target_seconds_per_km: Option<u32>,
    /// Explicit running ramp start pace in seconds per km
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_start_seconds_per_km: Option<u32>,
    /// Explicit running ramp end pace in seconds per km
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_end_seconds_per_km: Option<u32>,

    /// Explicit swim pace target in seconds per 100 m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swim_pace_per_100m: Option<u32>,

    /// Cadence target (RPM for bike/run, SPM for swim)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence_target: Option<u32>,
}

fn positive(value: Option<u32>) -> bool {
    value.is_some_and(|v| v > 0)
}

impl WorkoutBlock {
    /// Whether both unified ramp bounds are set and positive
    #[must_use]
    pub fn has_ramp_intensity(&self) -> bool {
        positive(self.intensity_start) && positive(self.intensity_end)
    }

    /// Whether any intensity field (unified or sport-specific) is positive
    #[must_use]
    pub fn has_any_intensity(&self) -> bool {
        self.has_ramp_intensity()
            || positive(self.intensity_target)
            || positive(self.power_target_percent)
            || positive(self.power_start_percent)
            || positive(self.pace_target_seconds_per_km)
            || positive(self.pace_start_seconds_per_km)
            || positive(self.swim_pace_per_100m)
    }

    /// Whether the sport-appropriate explicit target field is already set.
    ///
    /// The zone resolver only fills a target the author left empty.
    #[must_use]
    pub fn has_explicit_target(&self, sport: SportType) -> bool {
        match sport {
            SportType::Cycling | SportType::Brick => positive(self.power_target_percent),
            SportType::Running => positive(self.pace_target_seconds_per_km),
            SportType::Swimming => positive(self.swim_pace_per_100m),
        }
    }

    /// Re-tag the block type from its intensity fields.
    ///
    /// Workout authors (human or tool-calling model) routinely mislabel
    /// blocks: a block carrying both ramp bounds is a ramp no matter what
    /// it says, and a block with no positive intensity anywhere is a
    /// pause. Applied by callers at create/update time.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.has_ramp_intensity() {
            self.block_type = BlockType::Ramp;
        } else if !self.has_any_intensity() {
            self.block_type = BlockType::Pause;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_retags_ramp() {
        let block = WorkoutBlock {
            block_type: BlockType::Steady,
            intensity_start: Some(60),
            intensity_end: Some(90),
            ..WorkoutBlock::default()
        };
        assert_eq!(block.normalized().block_type, BlockType::Ramp);
    }

    #[test]
    fn normalized_retags_pause() {
        let block = WorkoutBlock {
            block_type: BlockType::Interval,
            duration_seconds: Some(120),
            ..WorkoutBlock::default()
        };
        assert_eq!(block.normalized().block_type, BlockType::Pause);
    }

    #[test]
    fn normalized_leaves_explicit_pace_blocks_alone() {
        let block = WorkoutBlock {
            block_type: BlockType::Steady,
            pace_target_seconds_per_km: Some(270),
            ..WorkoutBlock::default()
        };
        assert_eq!(block.normalized().block_type, BlockType::Steady);
    }

    #[test]
    fn zero_intensity_target_is_not_intensity() {
        let block = WorkoutBlock {
            intensity_target: Some(0),
            ..WorkoutBlock::default()
        };
        assert!(!block.has_any_intensity());
    }
}
