// ABOUTME: Engine facade - wires collaborator stores to the calculators
// ABOUTME: Computes and returns values; persisting them is the caller's job
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

//! Engine facade.
//!
//! [`TrainingLoadService`] exposes the engine surface over the
//! collaborator stores: training estimates at create/update time,
//! session load at save time, zone resolution at display time, and the
//! PMC operations over session history. Entity lookups are the only
//! fallible step; every computation behind them is total.

use chrono::{NaiveDate, Utc};
use tracing::debug;
use trainload_core::{
    AthleteThresholds, CompletedSession, EngineError, SportType, Training, TrainingLoadState,
    WorkoutBlock, Zone,
};

use crate::block_metrics::MetricsCalculator;
use crate::pmc::{FormAssessment, PerformanceCalculator, PmcDataPoint};
use crate::session_metrics::{compute_session_metrics, SessionMetrics};
use crate::store::{AthleteStore, CoachRoster, SessionStore, ZoneSystemStore};
use crate::training_metrics::TrainingMetrics;
use crate::zones::{ResolvedBlock, ZoneResolver};

/// Facade over the engine's calculators and the caller's stores
pub struct TrainingLoadService<'a> {
    athletes: &'a dyn AthleteStore,
    sessions: &'a dyn SessionStore,
    coaches: &'a dyn CoachRoster,
    zone_systems: &'a dyn ZoneSystemStore,
    pmc: PerformanceCalculator,
}

impl<'a> TrainingLoadService<'a> {
    /// Create a service over the caller's entity stores
    #[must_use]
    pub const fn new(
        athletes: &'a dyn AthleteStore,
        sessions: &'a dyn SessionStore,
        coaches: &'a dyn CoachRoster,
        zone_systems: &'a dyn ZoneSystemStore,
    ) -> Self {
        Self {
            athletes,
            sessions,
            coaches,
            zone_systems,
            pmc: PerformanceCalculator::new(),
        }
    }

    fn thresholds_for(&self, athlete_id: &str) -> Result<AthleteThresholds, EngineError> {
        self.athletes
            .thresholds(athlete_id)
            .ok_or_else(|| EngineError::athlete_not_found(athlete_id))
    }

    /// Compute workout-level estimates for a set of blocks.
    ///
    /// # Errors
    /// Returns [`EngineError::AthleteNotFound`] when the athlete's
    /// thresholds cannot be looked up. Callers reproducing the legacy
    /// keep-prior-values behavior can ignore that error.
    pub fn compute_training_metrics(
        &self,
        blocks: &[WorkoutBlock],
        sport: SportType,
        athlete_id: &str,
    ) -> Result<TrainingMetrics, EngineError> {
        let thresholds = self.thresholds_for(athlete_id)?;
        Ok(MetricsCalculator::new(thresholds).training_metrics(blocks, sport))
    }

    /// Normalize a training's block types and refresh its estimates.
    ///
    /// The create/update path: blocks are re-tagged from their intensity
    /// fields, then the estimate fields are recomputed against the
    /// creator's thresholds.
    ///
    /// # Errors
    /// Returns [`EngineError::AthleteNotFound`] when the creator's
    /// thresholds cannot be looked up; the training is left untouched.
    pub fn refresh_training(&self, training: &mut Training) -> Result<(), EngineError> {
        let thresholds = self.thresholds_for(&training.created_by)?;

        let blocks: Vec<WorkoutBlock> = training
            .blocks
            .iter()
            .cloned()
            .map(WorkoutBlock::normalized)
            .collect();
        let metrics =
            MetricsCalculator::new(thresholds).training_metrics(&blocks, training.sport_type);

        training.blocks = blocks;
        training.estimated_tss = metrics.estimated_tss;
        training.estimated_if = metrics.estimated_if;
        training.estimated_duration_seconds = metrics.estimated_duration_seconds;
        training.estimated_distance = metrics.estimated_distance;
        Ok(())
    }

    /// Compute TSS/IF for a completed session from its measured averages.
    ///
    /// # Errors
    /// Returns [`EngineError::AthleteNotFound`] when the session's
    /// athlete cannot be looked up. Unusable measurements are not an
    /// error; they yield an unset [`SessionMetrics`].
    pub fn compute_session_metrics(
        &self,
        session: &CompletedSession,
    ) -> Result<SessionMetrics, EngineError> {
        let thresholds = self.thresholds_for(&session.user_id)?;
        Ok(compute_session_metrics(session, &thresholds))
    }

    /// Resolve zone labels on a workout's blocks for an athlete.
    ///
    /// Total by design: an unknown athlete resolves with empty
    /// thresholds (neutral references), and blocks that cannot be
    /// resolved come back unchanged.
    #[must_use]
    pub fn resolve_zones(
        &self,
        blocks: &[WorkoutBlock],
        athlete_id: &str,
        sport: SportType,
    ) -> Vec<ResolvedBlock> {
        let thresholds = self.athletes.thresholds(athlete_id).unwrap_or_else(|| {
            debug!(athlete_id, "athlete unknown, resolving zones against neutral references");
            AthleteThresholds::default()
        });
        ZoneResolver::new(self.coaches, self.zone_systems).resolve_blocks(
            blocks,
            &thresholds,
            athlete_id,
            sport,
        )
    }

    /// The effective zone list for an athlete and sport (first coach's
    /// active-or-default system); empty when none exists
    #[must_use]
    pub fn effective_zones(&self, athlete_id: &str, sport: SportType) -> Vec<Zone> {
        ZoneResolver::new(self.coaches, self.zone_systems).effective_zones(athlete_id, sport)
    }

    /// Recompute an athlete's rolling load state through today.
    ///
    /// # Errors
    /// Returns [`EngineError::AthleteNotFound`] when the athlete cannot
    /// be looked up.
    pub fn recompute_load(&self, athlete_id: &str) -> Result<TrainingLoadState, EngineError> {
        self.recompute_load_as_of(athlete_id, Utc::now().date_naive())
    }

    /// Recompute an athlete's rolling load state through a given day.
    ///
    /// The walk covers every calendar day from the athlete's first
    /// session; an athlete with no sessions gets the zero state. The
    /// returned state is the caller's to persist (single writer per
    /// athlete; last writer wins).
    ///
    /// # Errors
    /// Returns [`EngineError::AthleteNotFound`] when the athlete cannot
    /// be looked up.
    pub fn recompute_load_as_of(
        &self,
        athlete_id: &str,
        today: NaiveDate,
    ) -> Result<TrainingLoadState, EngineError> {
        // Existence check only; the walk consumes stored session TSS values.
        self.thresholds_for(athlete_id)?;
        let history = self.sessions.sessions_ascending(athlete_id);
        Ok(self.pmc.recompute_load(&history, today))
    }

    /// Recompute an athlete's load through today and read it into a
    /// form assessment (status plus recovery recommendation).
    ///
    /// # Errors
    /// Returns [`EngineError::AthleteNotFound`] when the athlete cannot
    /// be looked up.
    pub fn current_form(&self, athlete_id: &str) -> Result<FormAssessment, EngineError> {
        let state = self.recompute_load(athlete_id)?;
        Ok(PerformanceCalculator::assess(state))
    }

    /// Generate PMC chart points for a date window.
    ///
    /// Warm-up runs from the athlete's earliest session when it predates
    /// `from`. An athlete with no sessions gets an all-zero series.
    #[must_use]
    pub fn generate_pmc(
        &self,
        athlete_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<PmcDataPoint> {
        let history = self.sessions.sessions_ascending(athlete_id);
        self.pmc.generate(&history, from, to)
    }
}
