// ABOUTME: Foundation crate for the trainload training-load engine
// ABOUTME: Shared data models, error types, and domain constants
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

#![deny(unsafe_code)]

//! # Trainload Core
//!
//! Foundation crate providing the shared vocabulary of the trainload
//! engine: workout and session models, zone system definitions, athlete
//! threshold data, error types, and domain constants. This crate holds
//! no engine logic and performs no I/O.
//!
//! ## Modules
//!
//! - **errors**: `EngineError` for lookup-boundary failures
//! - **constants**: EMA windows, TSS scaling, speed-model coefficients
//! - **models**: workout blocks, trainings, sessions, zone systems, thresholds

/// Error types for the engine's lookup boundary
pub mod errors;

/// Domain constants named after what they scale
pub mod constants;

/// Core data models (blocks, trainings, sessions, zones, thresholds)
pub mod models;

pub use errors::EngineError;
pub use models::athlete::{AthleteThresholds, TrainingLoadState};
pub use models::block::{BlockType, WorkoutBlock};
pub use models::session::CompletedSession;
pub use models::sport::SportType;
pub use models::training::{Training, TrainingType};
pub use models::zones::{Zone, ZoneReferenceType, ZoneSystem};
