// ABOUTME: Sport type enumeration for trainings and completed sessions
// ABOUTME: Four supported sports with lenient parsing and display names
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

use serde::{Deserialize, Serialize};

/// Enumeration of supported sports.
///
/// `Brick` is a multi-sport workout (e.g. bike-to-run transition work);
/// the engine infers a per-block sport for brick trainings from which
/// target fields are populated on each block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SportType {
    /// Cycling workout, intensity referenced to FTP
    #[default]
    Cycling,
    /// Running workout, intensity referenced to functional threshold pace
    Running,
    /// Swimming workout, intensity referenced to critical swim speed
    Swimming,
    /// Multi-sport workout with per-block sport inference
    Brick,
}

impl SportType {
    /// Parse a stored sport-type string, falling back to `Cycling`.
    ///
    /// Completed sessions carry the sport as a free string in the
    /// original documents; anything unrecognized is treated as cycling
    /// rather than rejected.
    #[must_use]
    pub fn from_str_lenient(value: Option<&str>) -> Self {
        match value {
            Some("RUNNING") => Self::Running,
            Some("SWIMMING") => Self::Swimming,
            Some("BRICK") => Self::Brick,
            _ => Self::Cycling,
        }
    }

    /// Human-readable name for this sport
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cycling => "cycling",
            Self::Running => "running",
            Self::Swimming => "swimming",
            Self::Brick => "brick",
        }
    }
}
