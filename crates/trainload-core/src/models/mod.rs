// ABOUTME: Core data models for the trainload engine
// ABOUTME: Workout blocks, trainings, completed sessions, zone systems, thresholds
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

//! Core data models.
//!
//! Serde casing matches the documents written by the original backend:
//! `camelCase` field names, `SCREAMING_SNAKE_CASE` enum variants.

/// Athlete reference thresholds and persisted load state
pub mod athlete;

/// Workout block types and the block value itself
pub mod block;

/// Completed session records
pub mod session;

/// Sport type enumeration
pub mod sport;

/// Training (ordered workout blocks plus derived estimates)
pub mod training;

/// Coach-owned zone systems
pub mod zones;
