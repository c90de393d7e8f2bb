// ABOUTME: Shared test fixture - in-memory implementations of the store traits
// ABOUTME: One struct backs all four collaborator interfaces
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

#![allow(dead_code, clippy::return_self_not_must_use, clippy::must_use_candidate)]

use std::collections::HashMap;

use trainload_core::{AthleteThresholds, CompletedSession, SportType, Zone, ZoneSystem};
use trainload_engine::store::{AthleteStore, CoachRoster, SessionStore, ZoneSystemStore};

/// In-memory backing for all four collaborator traits
#[derive(Default)]
pub struct InMemoryStores {
    pub athletes: HashMap<String, AthleteThresholds>,
    pub sessions: Vec<CompletedSession>,
    pub coaches: HashMap<String, Vec<String>>,
    pub systems: Vec<ZoneSystem>,
}

impl InMemoryStores {
    pub fn with_athlete(mut self, athlete_id: &str, thresholds: AthleteThresholds) -> Self {
        self.athletes.insert(athlete_id.to_owned(), thresholds);
        self
    }

    pub fn with_coach(mut self, athlete_id: &str, coach_id: &str) -> Self {
        self.coaches
            .entry(athlete_id.to_owned())
            .or_default()
            .push(coach_id.to_owned());
        self
    }

    pub fn with_system(mut self, system: ZoneSystem) -> Self {
        self.systems.push(system);
        self
    }

    pub fn with_session(mut self, session: CompletedSession) -> Self {
        self.sessions.push(session);
        self
    }
}

impl AthleteStore for InMemoryStores {
    fn thresholds(&self, athlete_id: &str) -> Option<AthleteThresholds> {
        self.athletes.get(athlete_id).cloned()
    }
}

impl SessionStore for InMemoryStores {
    fn sessions_ascending(&self, athlete_id: &str) -> Vec<CompletedSession> {
        let mut sessions: Vec<CompletedSession> = self
            .sessions
            .iter()
            .filter(|session| session.user_id == athlete_id)
            .cloned()
            .collect();
        sessions.sort_by_key(|session| session.completed_at);
        sessions
    }
}

impl CoachRoster for InMemoryStores {
    fn coaches_for_athlete(&self, athlete_id: &str) -> Vec<String> {
        self.coaches.get(athlete_id).cloned().unwrap_or_default()
    }
}

impl ZoneSystemStore for InMemoryStores {
    fn systems_for_coach(&self, coach_id: &str, sport: SportType) -> Vec<ZoneSystem> {
        self.systems
            .iter()
            .filter(|system| system.coach_id == coach_id && system.sport_type == sport)
            .cloned()
            .collect()
    }

    fn system_by_id(&self, zone_system_id: &str) -> Option<ZoneSystem> {
        self.systems
            .iter()
            .find(|system| system.id == zone_system_id)
            .cloned()
    }
}

/// Standard thresholds used across the suite
pub fn default_thresholds() -> AthleteThresholds {
    AthleteThresholds {
        ftp: Some(250),
        functional_threshold_pace: Some(300),
        critical_swim_speed: Some(120),
        ..AthleteThresholds::default()
    }
}

/// A zone band with just the fields that matter for resolution
pub fn zone(label: &str, low: u32, high: u32) -> Zone {
    Zone {
        label: label.to_owned(),
        low,
        high,
        description: None,
    }
}
