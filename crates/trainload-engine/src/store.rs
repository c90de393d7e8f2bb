// ABOUTME: Collaborator lookup traits - the engine's only view of stored entities
// ABOUTME: Callers implement these over their persistence layer; the engine never writes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

//! Collaborator interfaces.
//!
//! The engine consumes already-loaded entities through these traits and
//! returns computed values for the caller to persist. All methods are
//! synchronous snapshots: implementations return owned copies that stay
//! immutable for the duration of one computation.

use trainload_core::{AthleteThresholds, CompletedSession, SportType, ZoneSystem};

/// Source of athlete reference thresholds
pub trait AthleteStore {
    /// The athlete's thresholds, or `None` when the athlete is unknown
    fn thresholds(&self, athlete_id: &str) -> Option<AthleteThresholds>;
}

/// Source of completed-session history
pub trait SessionStore {
    /// All sessions for an athlete, ascending by completion time
    fn sessions_ascending(&self, athlete_id: &str) -> Vec<CompletedSession>;
}

/// Source of athlete-coach relationships
pub trait CoachRoster {
    /// Coaches associated with an athlete, in a deterministic order.
    ///
    /// The zone resolver honors this order: the first coach with a
    /// usable zone system wins.
    fn coaches_for_athlete(&self, athlete_id: &str) -> Vec<String>;
}

/// Source of coach-owned zone systems
pub trait ZoneSystemStore {
    /// All of a coach's zone systems for a sport
    fn systems_for_coach(&self, coach_id: &str, sport: SportType) -> Vec<ZoneSystem>;

    /// Look up one zone system by id (blocks may pin a specific system)
    fn system_by_id(&self, zone_system_id: &str) -> Option<ZoneSystem>;
}
