// ABOUTME: Training model - an ordered list of workout blocks with derived estimates
// ABOUTME: Estimate fields are advisory and recomputed at create/update time
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::block::WorkoutBlock;
use super::sport::SportType;

/// Coarse classification of a training's purpose
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingType {
    /// Easy spinning / recovery jog
    Recovery,
    /// Long aerobic base work
    Endurance,
    /// Sustained moderately-hard effort
    Tempo,
    /// Work at or around the lactate threshold
    Threshold,
    /// Short maximal-aerobic intervals
    Vo2max,
    /// Race or race simulation
    Race,
}

/// An authored workout: ordered blocks plus cached load estimates.
///
/// The `estimated_*` fields are projections of the blocks through the
/// creating athlete's thresholds. They are advisory values recomputed on
/// every create/update, never measured results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    /// Unique id
    pub id: String,
    /// Display title
    pub title: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered workout blocks
    pub blocks: Vec<WorkoutBlock>,
    /// Sport this training is written for
    pub sport_type: SportType,
    /// Purpose classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_type: Option<TrainingType>,

    /// Estimated Training Stress Score over all blocks
    pub estimated_tss: u32,
    /// Estimated Intensity Factor (0-1+ scale, 2 decimals)
    pub estimated_if: f64,
    /// Estimated total duration in seconds
    pub estimated_duration_seconds: u32,
    /// Estimated total distance in meters
    pub estimated_distance: u32,

    /// Id of the creating user
    pub created_by: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Training {
    /// Create an empty training shell for an author; estimates start at zero
    #[must_use]
    pub fn new(title: impl Into<String>, sport_type: SportType, created_by: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            blocks: Vec::new(),
            sport_type,
            training_type: None,
            estimated_tss: 0,
            estimated_if: 0.0,
            estimated_duration_seconds: 0,
            estimated_distance: 0,
            created_by: created_by.into(),
            created_at: Utc::now(),
        }
    }
}
