// ABOUTME: Error types for the trainload engine's entity-lookup boundary
// ABOUTME: Inside the engine all computations are total; only lookups can fail
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

//! Engine error types.
//!
//! The metric calculators never return errors: invalid or missing data
//! degrades to neutral contributions so that a plausible estimate is
//! always produced. The one failure the engine surfaces is an athlete
//! lookup on behalf of a caller; zone-system and zone-label misses
//! degrade to unchanged blocks instead.

use thiserror::Error;

/// Errors raised at the engine's entity-lookup boundary
#[derive(Debug, Error)]
pub enum EngineError {
    /// The athlete referenced by an operation does not exist
    #[error("athlete '{athlete_id}' not found")]
    AthleteNotFound {
        /// Id of the missing athlete
        athlete_id: String,
    },
}

impl EngineError {
    /// Missing athlete by id
    #[must_use]
    pub fn athlete_not_found(athlete_id: impl Into<String>) -> Self {
        Self::AthleteNotFound {
            athlete_id: athlete_id.into(),
        }
    }
}
