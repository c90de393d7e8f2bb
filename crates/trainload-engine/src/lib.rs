// ABOUTME: Training load and intensity resolution engine
// ABOUTME: Pure, synchronous computations; persistence stays with the caller
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

#![deny(unsafe_code)]

//! # Trainload Engine
//!
//! Turns abstract workout descriptions into quantitative training-load
//! metrics, aggregates completed sessions into a Performance Management
//! Chart, and resolves coach-defined intensity zones to concrete athlete
//! targets.
//!
//! Every computation here is a total function over in-memory values:
//! invalid or missing data degrades to neutral contributions instead of
//! raising. Only the entity lookups behind [`store`] can fail, and those
//! failures belong to the caller. Nothing in this crate performs I/O or
//! persists results.
//!
//! ## Modules
//!
//! - **`block_metrics`**: per-block intensity, duration/distance, TSS
//! - **`training_metrics`**: workout-level estimate aggregation
//! - **`session_metrics`**: session TSS/IF from measured averages
//! - **`pmc`**: CTL/ATL/TSB exponential moving averages and chart points
//! - **`zones`**: zone-label resolution against coach zone systems
//! - **`store`**: collaborator lookup traits supplied by the caller
//! - **`service`**: facade wiring lookups to the calculators

/// Per-block metrics: intensity, derived duration/distance, TSS contribution
pub mod block_metrics;

/// Performance Management Chart aggregation (CTL/ATL/TSB)
pub mod pmc;

/// Facade exposing the engine surface over collaborator stores
pub mod service;

/// Session-level TSS/IF from measured averages
pub mod session_metrics;

/// Collaborator lookup traits (athletes, sessions, coaches, zone systems)
pub mod store;

/// Workout-level estimate aggregation
pub mod training_metrics;

/// Zone-label resolution against coach-owned zone systems
pub mod zones;

pub use block_metrics::{BlockMetrics, MetricsCalculator};
pub use pmc::{FormAssessment, PerformanceCalculator, PmcDataPoint, TrainingStatus};
pub use service::TrainingLoadService;
pub use session_metrics::{compute_session_metrics, SessionMetrics};
pub use store::{AthleteStore, CoachRoster, SessionStore, ZoneSystemStore};
pub use training_metrics::TrainingMetrics;
pub use zones::{ResolvedBlock, ZoneResolver};
