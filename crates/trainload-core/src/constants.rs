// ABOUTME: Domain constants for training-load and intensity calculations
// ABOUTME: EMA windows, TSS scaling, speed-model coefficients, threshold fallbacks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

//! Domain constants.
//!
//! Every number the engine multiplies by lives here under a name.

/// Chronic Training Load window - 42 days of exponential smoothing (fitness)
pub const CTL_WINDOW_DAYS: f64 = 42.0;

/// Acute Training Load window - 7 days of exponential smoothing (fatigue)
pub const ATL_WINDOW_DAYS: f64 = 7.0;

/// TSS scale: one hour at threshold intensity scores 100
pub const TSS_BASE_MULTIPLIER: f64 = 100.0;

/// Seconds per hour as f64 for duration conversions
pub const SECONDS_PER_HOUR_F64: f64 = 3600.0;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Swim pace reference distance in meters (CSS is expressed per 100 m)
pub const SWIM_REFERENCE_METERS: f64 = 100.0;

/// Cycling power-to-speed heuristic coefficient (m/s at 100% intensity).
///
/// Empirical constant carried over from the original estimator for
/// bit-compatible duration/distance estimates. Not a physical model.
pub const CYCLING_SPEED_COEFFICIENT: f64 = 8.33;

/// Fallback FTP in watts when an athlete has no recorded value
pub const DEFAULT_FTP_WATTS: u32 = 250;

/// Fallback functional threshold pace in seconds per km (5:00/km)
pub const DEFAULT_THRESHOLD_PACE_SEC_PER_KM: u32 = 300;

/// Fallback critical swim speed in seconds per 100 m (2:00/100m)
pub const DEFAULT_CSS_SEC_PER_100M: u32 = 120;

/// Neutral reference for percentage-only zone systems with no athlete value
pub const NEUTRAL_ZONE_REFERENCE: f64 = 100.0;
