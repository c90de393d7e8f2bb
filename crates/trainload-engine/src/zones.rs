// ABOUTME: Zone resolution - rewrites zone-labeled blocks with concrete athlete targets
// ABOUTME: Multi-coach lookup with active-then-default system preference
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

//! Zone resolution.
//!
//! A coach defines zones as percentage bands over a reference metric;
//! when a workout is shown to an athlete, zone-labeled blocks are
//! rewritten with the athlete's own numbers. No coach, no matching zone,
//! or no zone system for the sport all leave the block unchanged - these
//! are normal outcomes, not failures.

use tracing::debug;
use trainload_core::constants::NEUTRAL_ZONE_REFERENCE;
use trainload_core::{AthleteThresholds, SportType, WorkoutBlock, Zone, ZoneSystem};

use crate::store::{CoachRoster, ZoneSystemStore};

/// One resolution outcome: the (possibly rewritten) block plus whether a
/// zone-derived target was actually written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBlock {
    /// The block, rewritten when resolution succeeded
    pub block: WorkoutBlock,
    /// True when a zone-derived target was written into the block
    pub resolved: bool,
}

/// Resolves zone labels against coach-owned zone systems
pub struct ZoneResolver<'a> {
    coaches: &'a dyn CoachRoster,
    zone_systems: &'a dyn ZoneSystemStore,
}

impl<'a> ZoneResolver<'a> {
    /// Create a resolver over the coach roster and zone-system store
    #[must_use]
    pub const fn new(coaches: &'a dyn CoachRoster, zone_systems: &'a dyn ZoneSystemStore) -> Self {
        Self {
            coaches,
            zone_systems,
        }
    }

    /// Pick the zone system to resolve an athlete's blocks against.
    ///
    /// Walks the athlete's coaches in roster order; per coach the active
    /// system is preferred and the default system is the fallback. The
    /// first coach with either wins.
    fn system_for_athlete(&self, athlete_id: &str, sport: SportType) -> Option<ZoneSystem> {
        for coach_id in self.coaches.coaches_for_athlete(athlete_id) {
            let systems = self.zone_systems.systems_for_coach(&coach_id, sport);
            let chosen = systems
                .iter()
                .find(|system| system.active)
                .or_else(|| systems.iter().find(|system| system.is_default));
            if let Some(system) = chosen {
                return Some(system.clone());
            }
        }
        None
    }

    /// The effective zone list for an athlete and sport.
    ///
    /// Empty when the athlete has no coach or no coach defines a system
    /// for the sport.
    #[must_use]
    pub fn effective_zones(&self, athlete_id: &str, sport: SportType) -> Vec<Zone> {
        self.system_for_athlete(athlete_id, sport)
            .map(|system| system.zones)
            .unwrap_or_default()
    }

    /// Resolve every zone-labeled block of a workout.
    ///
    /// Returns one entry per input block. Blocks without a zone label,
    /// blocks whose sport-appropriate target is already set (explicit
    /// author intent wins), and blocks whose label matches nothing come
    /// back unchanged with `resolved: false`.
    #[must_use]
    pub fn resolve_blocks(
        &self,
        blocks: &[WorkoutBlock],
        thresholds: &AthleteThresholds,
        athlete_id: &str,
        sport: SportType,
    ) -> Vec<ResolvedBlock> {
        let coach_system = self.system_for_athlete(athlete_id, sport);

        blocks
            .iter()
            .map(|block| self.resolve_block(block, thresholds, coach_system.as_ref(), sport))
            .collect()
    }

    fn resolve_block(
        &self,
        block: &WorkoutBlock,
        thresholds: &AthleteThresholds,
        coach_system: Option<&ZoneSystem>,
        sport: SportType,
    ) -> ResolvedBlock {
        let unchanged = || ResolvedBlock {
            block: block.clone(),
            resolved: false,
        };

        let Some(label) = block.zone_label.as_deref().filter(|l| !l.is_empty()) else {
            return unchanged();
        };
        if block.has_explicit_target(sport) {
            return unchanged();
        }

        // A block may pin a specific zone system; otherwise the coach's
        // chosen system applies.
        let pinned = block
            .zone_system_id
            .as_deref()
            .and_then(|id| self.zone_systems.system_by_id(id));
        let Some(system) = pinned.as_ref().or(coach_system) else {
            return unchanged();
        };

        let Some(zone) = system.find_zone(label) else {
            debug!(
                label,
                system = %system.name,
                "zone label not found in system, leaving block unchanged"
            );
            return unchanged();
        };

        // Missing athlete reference: pace zones degrade to 0 (no usable
        // pace), percentage zones to the neutral 100 reference.
        let reference = thresholds.reference_value(system.reference_type).unwrap_or({
            if system.reference_type.is_pace() {
                0.0
            } else {
                NEUTRAL_ZONE_REFERENCE
            }
        });

        let target = (zone.midpoint_percent() / 100.0 * reference).round() as u32;

        let mut rewritten = block.clone();
        match sport {
            SportType::Cycling | SportType::Brick => rewritten.power_target_percent = Some(target),
            SportType::Running => rewritten.pace_target_seconds_per_km = Some(target),
            SportType::Swimming => rewritten.swim_pace_per_100m = Some(target),
        }

        ResolvedBlock {
            block: rewritten,
            resolved: true,
        }
    }
}
