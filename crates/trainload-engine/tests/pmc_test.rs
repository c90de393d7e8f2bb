// ABOUTME: Integration tests for the Performance Management Chart
// ABOUTME: Rest-day decay, spike response, and the service-level load recompute
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::{default_thresholds, InMemoryStores};
use trainload_core::{CompletedSession, EngineError};
use trainload_engine::{PerformanceCalculator, TrainingLoadService, TrainingStatus};

fn service(stores: &InMemoryStores) -> TrainingLoadService<'_> {
    TrainingLoadService::new(stores, stores, stores, stores)
}

fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).unwrap()
}

fn session_on(athlete: &str, date: NaiveDate, tss: f64) -> CompletedSession {
    let completed_at = Utc
        .from_utc_datetime(&date.and_hms_opt(10, 0, 0).unwrap());
    let mut session = CompletedSession::new(athlete, completed_at);
    session.tss = Some(tss);
    session
}

#[test]
fn no_sessions_yields_zero_state() {
    let stores = InMemoryStores::default().with_athlete("athlete", default_thresholds());

    let state = service(&stores).recompute_load("athlete").unwrap();

    assert!(state.ctl.abs() < f64::EPSILON);
    assert!(state.atl.abs() < f64::EPSILON);
    assert!(state.tsb.abs() < f64::EPSILON);
}

#[test]
fn no_sessions_yields_flat_zero_chart() {
    let stores = InMemoryStores::default().with_athlete("athlete", default_thresholds());

    let points = service(&stores).generate_pmc("athlete", day(2026, 3, 1), day(2026, 3, 7));

    assert_eq!(points.len(), 7);
    for point in points {
        assert!(point.ctl.abs() < f64::EPSILON);
        assert!(point.atl.abs() < f64::EPSILON);
        assert!(point.tsb.abs() < f64::EPSILON);
        assert!(point.daily_tss.abs() < f64::EPSILON);
    }
}

#[test]
fn single_spike_loads_fatigue_faster_than_fitness() {
    let spike = day(2026, 3, 1);
    let stores = InMemoryStores::default()
        .with_athlete("athlete", default_thresholds())
        .with_session(session_on("athlete", spike, 100.0));

    let points = service(&stores).generate_pmc("athlete", spike, day(2026, 3, 3));

    // k = 1 - e^(-1/7) loads ~13.3 of the 100 into ATL on day one,
    // k = 1 - e^(-1/42) only ~2.4 into CTL
    assert!((points[0].atl - 13.3).abs() < f64::EPSILON);
    assert!((points[0].ctl - 2.4).abs() < f64::EPSILON);
    assert!((points[0].tsb + 11.0).abs() < f64::EPSILON);
    assert!((points[0].daily_tss - 100.0).abs() < f64::EPSILON);

    // rest days decay both averages, ATL faster
    assert!(points[1].atl < points[0].atl);
    assert!(points[1].ctl < points[0].ctl);
    assert!(points[2].atl < points[1].atl);
    // form recovers as fatigue drains
    assert!(points[2].tsb > points[0].tsb);
}

#[test]
fn rest_days_between_sessions_are_walked() {
    let stores = InMemoryStores::default()
        .with_athlete("athlete", default_thresholds())
        .with_session(session_on("athlete", day(2026, 3, 1), 80.0))
        .with_session(session_on("athlete", day(2026, 3, 10), 80.0));

    let with_gap = service(&stores)
        .recompute_load_as_of("athlete", day(2026, 3, 10))
        .unwrap();

    // same two sessions on consecutive days must accumulate more fatigue
    let dense = InMemoryStores::default()
        .with_athlete("athlete", default_thresholds())
        .with_session(session_on("athlete", day(2026, 3, 9), 80.0))
        .with_session(session_on("athlete", day(2026, 3, 10), 80.0));
    let back_to_back = service(&dense)
        .recompute_load_as_of("athlete", day(2026, 3, 10))
        .unwrap();

    assert!(back_to_back.atl > with_gap.atl);
}

#[test]
fn same_day_sessions_sum_into_one_daily_total() {
    let date = day(2026, 3, 1);
    let split = InMemoryStores::default()
        .with_athlete("athlete", default_thresholds())
        .with_session(session_on("athlete", date, 40.0))
        .with_session(session_on("athlete", date, 60.0));
    let single = InMemoryStores::default()
        .with_athlete("athlete", default_thresholds())
        .with_session(session_on("athlete", date, 100.0));

    let split_points = service(&split).generate_pmc("athlete", date, date);
    let single_points = service(&single).generate_pmc("athlete", date, date);

    assert_eq!(split_points, single_points);
}

#[test]
fn chart_warms_up_from_history_before_the_window() {
    let spike = day(2026, 3, 1);
    let from = day(2026, 3, 5);
    let stores = InMemoryStores::default()
        .with_athlete("athlete", default_thresholds())
        .with_session(session_on("athlete", spike, 100.0));

    let points = service(&stores).generate_pmc("athlete", from, day(2026, 3, 6));

    assert_eq!(points[0].date, from);
    // the spike four days earlier still shows as residual load
    assert!(points[0].atl > 0.0);
    assert!(points[0].ctl > 0.0);
}

#[test]
fn sessions_without_tss_do_not_contribute_load() {
    let date = day(2026, 3, 1);
    let mut no_tss = session_on("athlete", date, 0.0);
    no_tss.tss = None;
    let stores = InMemoryStores::default()
        .with_athlete("athlete", default_thresholds())
        .with_session(no_tss);

    let state = service(&stores)
        .recompute_load_as_of("athlete", date)
        .unwrap();

    // the session still anchors the walk start, but adds no stress
    assert!(state.ctl.abs() < f64::EPSILON);
    assert!(state.atl.abs() < f64::EPSILON);
}

#[test]
fn recompute_load_requires_a_known_athlete() {
    let stores = InMemoryStores::default();

    let result = service(&stores).recompute_load("nobody");

    assert!(matches!(result, Err(EngineError::AthleteNotFound { .. })));
}

#[test]
fn recompute_and_chart_agree_on_the_final_day() {
    let stores = InMemoryStores::default()
        .with_athlete("athlete", default_thresholds())
        .with_session(session_on("athlete", day(2026, 3, 1), 90.0))
        .with_session(session_on("athlete", day(2026, 3, 3), 60.0))
        .with_session(session_on("athlete", day(2026, 3, 6), 120.0));
    let today = day(2026, 3, 8);

    let state = service(&stores)
        .recompute_load_as_of("athlete", today)
        .unwrap();
    let points = service(&stores).generate_pmc("athlete", day(2026, 3, 1), today);

    let last = points.last().unwrap();
    assert!((last.ctl - state.ctl).abs() < f64::EPSILON);
    assert!((last.atl - state.atl).abs() < f64::EPSILON);
    assert!((last.tsb - state.tsb).abs() < f64::EPSILON);
}

#[test]
fn fresh_athlete_needs_no_recovery() {
    let stores = InMemoryStores::default().with_athlete("athlete", default_thresholds());

    let form = service(&stores).current_form("athlete").unwrap();

    assert_eq!(form.status, TrainingStatus::Fresh);
    assert_eq!(form.recommended_recovery_days, 0);
    assert!(form.state.tsb.abs() < f64::EPSILON);
}

#[test]
fn heavy_day_reads_as_overreaching() {
    // a single 300-TSS day drives TSB deep negative immediately
    let today = Utc::now().date_naive();
    let stores = InMemoryStores::default()
        .with_athlete("athlete", default_thresholds())
        .with_session(session_on("athlete", today, 300.0));

    let form = service(&stores).current_form("athlete").unwrap();

    assert_eq!(form.status, TrainingStatus::Overreaching);
    assert_eq!(form.recommended_recovery_days, 5);
    assert!(form.state.tsb < -20.0);
}

#[test]
fn custom_windows_change_the_response_speed() {
    let sessions = vec![session_on("athlete", day(2026, 3, 1), 100.0)];

    let standard = PerformanceCalculator::new().recompute_load(&sessions, day(2026, 3, 1));
    let twitchy = PerformanceCalculator::with_windows(14.0, 3.0).recompute_load(&sessions, day(2026, 3, 1));

    assert!(twitchy.ctl > standard.ctl);
    assert!(twitchy.atl > standard.atl);
}
