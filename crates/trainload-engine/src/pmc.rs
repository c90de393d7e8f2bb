// ABOUTME: Performance Management Chart aggregation - CTL/ATL/TSB over daily TSS
// ABOUTME: Dual exponential moving averages walked over every calendar day
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

//! Performance Management Chart.
//!
//! Two exponential moving averages over the daily TSS series: a 42-day
//! "fitness" horizon (CTL) and a 7-day "fatigue" horizon (ATL), with
//! form (TSB) as their difference. The walk covers **every** calendar
//! day from the first recorded session, including zero-TSS rest days -
//! skipping rest days would silently break the decay.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trainload_core::constants::{ATL_WINDOW_DAYS, CTL_WINDOW_DAYS};
use trainload_core::{CompletedSession, TrainingLoadState};

/// One day of the Performance Management Chart.
///
/// Pure projection of the EMA walk; never persisted, safe to regenerate
/// from session history at any time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PmcDataPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Chronic Training Load, 1 decimal
    pub ctl: f64,
    /// Acute Training Load, 1 decimal
    pub atl: f64,
    /// Training Stress Balance (CTL - ATL), 1 decimal
    pub tsb: f64,
    /// Total TSS recorded on this day
    pub daily_tss: f64,
}

/// Training status read off the TSB value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    /// TSB < -10: high fatigue, recovery needed
    Overreaching,
    /// TSB -10 to 0: productive training zone
    Productive,
    /// TSB 0 to +10: fresh, ready to perform
    Fresh,
    /// TSB > +10: risk of detraining
    Detraining,
}

/// Calculator for the rolling CTL/ATL/TSB state and PMC series
#[derive(Debug, Clone, Copy)]
pub struct PerformanceCalculator {
    ctl_window_days: f64,
    atl_window_days: f64,
}

impl Default for PerformanceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl PerformanceCalculator {
    /// Create a calculator with the standard 42/7-day windows
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ctl_window_days: CTL_WINDOW_DAYS,
            atl_window_days: ATL_WINDOW_DAYS,
        }
    }

    /// Create a calculator with custom window sizes
    #[must_use]
    pub const fn with_windows(ctl_days: f64, atl_days: f64) -> Self {
        Self {
            ctl_window_days: ctl_days,
            atl_window_days: atl_days,
        }
    }

    /// Smoothing constant for an `N`-day horizon: `k = 1 - e^(-1/N)`
    fn smoothing(window_days: f64) -> f64 {
        1.0 - (-1.0 / window_days).exp()
    }

    /// Sum session TSS per calendar day; sessions without a TSS are skipped
    fn daily_tss_map(sessions: &[CompletedSession]) -> HashMap<NaiveDate, f64> {
        let mut map = HashMap::new();
        for session in sessions {
            if let Some(tss) = session.tss {
                *map.entry(session.completed_at.date_naive()).or_insert(0.0) += tss;
            }
        }
        map
    }

    /// Earliest session date, regardless of whether that session carries a TSS
    fn first_session_date(sessions: &[CompletedSession]) -> Option<NaiveDate> {
        sessions
            .iter()
            .map(|session| session.completed_at.date_naive())
            .min()
    }

    /// Recompute the rolling load state from an athlete's full history.
    ///
    /// Walks every calendar day from the first session through `today`;
    /// days without sessions contribute zero TSS, which still decays both
    /// averages. The returned state is the caller's to persist.
    #[must_use]
    pub fn recompute_load(
        &self,
        sessions: &[CompletedSession],
        today: NaiveDate,
    ) -> TrainingLoadState {
        let Some(first_date) = Self::first_session_date(sessions) else {
            return TrainingLoadState::default();
        };

        let daily_tss = Self::daily_tss_map(sessions);
        let k_ctl = Self::smoothing(self.ctl_window_days);
        let k_atl = Self::smoothing(self.atl_window_days);

        let mut ctl = 0.0;
        let mut atl = 0.0;
        let mut cursor = first_date;
        while cursor <= today {
            let tss = daily_tss.get(&cursor).copied().unwrap_or(0.0);
            ctl += (tss - ctl) * k_ctl;
            atl += (tss - atl) * k_atl;
            let Some(next) = cursor.succ_opt() else { break };
            cursor = next;
        }

        debug!(
            sessions = sessions.len(),
            days = (today - first_date).num_days() + 1,
            ctl,
            atl,
            "recomputed rolling training load"
        );

        TrainingLoadState {
            ctl: round1(ctl),
            atl: round1(atl),
            tsb: round1(ctl - atl),
        }
    }

    /// Generate one PMC point per day in `[from, to]`.
    ///
    /// The EMA state is warmed up from the earliest session (or `from`,
    /// whichever is earlier) with the same per-day update rule; warm-up
    /// days are simply not emitted. An empty window (`from > to`) yields
    /// an empty series.
    #[must_use]
    pub fn generate(
        &self,
        sessions: &[CompletedSession],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<PmcDataPoint> {
        let daily_tss = Self::daily_tss_map(sessions);
        let k_ctl = Self::smoothing(self.ctl_window_days);
        let k_atl = Self::smoothing(self.atl_window_days);

        let start = Self::first_session_date(sessions).map_or(from, |first| first.min(from));

        let mut ctl = 0.0;
        let mut atl = 0.0;

        let mut cursor = start;
        while cursor < from {
            let tss = daily_tss.get(&cursor).copied().unwrap_or(0.0);
            ctl += (tss - ctl) * k_ctl;
            atl += (tss - atl) * k_atl;
            let Some(next) = cursor.succ_opt() else { break };
            cursor = next;
        }

        let mut points = Vec::new();
        let mut cursor = from;
        while cursor <= to {
            let tss = daily_tss.get(&cursor).copied().unwrap_or(0.0);
            ctl += (tss - ctl) * k_ctl;
            atl += (tss - atl) * k_atl;
            points.push(PmcDataPoint {
                date: cursor,
                ctl: round1(ctl),
                atl: round1(atl),
                tsb: round1(ctl - atl),
                daily_tss: tss,
            });
            let Some(next) = cursor.succ_opt() else { break };
            cursor = next;
        }

        points
    }

    /// Read a training status off a TSB value.
    ///
    /// Bands at -10 / 0 / +10: below the lowest is overreaching, above
    /// the highest is detraining territory.
    #[must_use]
    pub fn interpret_tsb(tsb: f64) -> TrainingStatus {
        if tsb > 10.0 {
            TrainingStatus::Detraining
        } else if tsb >= 0.0 {
            TrainingStatus::Fresh
        } else if tsb >= -10.0 {
            TrainingStatus::Productive
        } else {
            TrainingStatus::Overreaching
        }
    }

    /// Recommended recovery days for a TSB value, deeper fatigue earning
    /// a longer break
    #[must_use]
    pub fn recommend_recovery_days(tsb: f64) -> u32 {
        if tsb >= 0.0 {
            0
        } else if tsb >= -10.0 {
            1
        } else if tsb >= -15.0 {
            2
        } else if tsb >= -20.0 {
            3
        } else {
            5
        }
    }

    /// Read a load state into a form assessment
    #[must_use]
    pub fn assess(state: TrainingLoadState) -> FormAssessment {
        FormAssessment {
            state,
            status: Self::interpret_tsb(state.tsb),
            recommended_recovery_days: Self::recommend_recovery_days(state.tsb),
        }
    }
}

/// A load state read through the TSB bands: current status plus a
/// recovery recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormAssessment {
    /// The rolling load state the assessment was read from
    pub state: TrainingLoadState,
    /// Training status derived from the TSB value
    pub status: TrainingStatus,
    /// Recommended number of recovery days
    pub recommended_recovery_days: u32,
}
