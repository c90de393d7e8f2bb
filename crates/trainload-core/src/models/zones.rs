// ABOUTME: Coach-owned zone system models - named intensity bands over a reference metric
// ABOUTME: Zone labels resolve case-insensitively; midpoints scale athlete references
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Trainload Project

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::sport::SportType;

/// Reference metric a zone system's percentages are expressed against
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneReferenceType {
    /// Functional Threshold Power (watts)
    Ftp,
    /// `VO2max` power (watts)
    Vo2maxPower,
    /// Functional threshold pace (sec/km)
    ThresholdPace,
    /// `VO2max` pace (sec/km)
    Vo2maxPace,
    /// Critical swim speed (sec/100m)
    Css,
    /// 5K race pace (sec/km)
    Pace5k,
    /// 10K race pace (sec/km)
    Pace10k,
    /// Half-marathon race pace (sec/km)
    PaceHalfMarathon,
    /// Marathon race pace (sec/km)
    PaceMarathon,
    /// Coach-defined reference with no athlete-side value
    Custom,
}

impl ZoneReferenceType {
    /// Whether zones over this reference resolve to a pace value
    /// (sec/km or sec/100m) rather than a percent-of-power target
    #[must_use]
    pub const fn is_pace(self) -> bool {
        matches!(
            self,
            Self::ThresholdPace
                | Self::Vo2maxPace
                | Self::Css
                | Self::Pace5k
                | Self::Pace10k
                | Self::PaceHalfMarathon
                | Self::PaceMarathon
        )
    }
}

/// One intensity band within a zone system
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Zone label (e.g. "Z4"); unique within a system, matched case-insensitively
    pub label: String,
    /// Lower bound as percent of the reference
    #[serde(alias = "lowerPercent")]
    pub low: u32,
    /// Upper bound as percent of the reference
    #[serde(alias = "upperPercent")]
    pub high: u32,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Zone {
    /// Midpoint of the band as a percentage
    #[must_use]
    pub fn midpoint_percent(&self) -> f64 {
        f64::from(self.low + self.high) / 2.0
    }
}

/// A coach-owned set of intensity zones for one sport.
///
/// A coach may mark at most one system per sport `active` (used
/// preferentially when resolving an athlete's zones) and/or `is_default`
/// (the fallback when no system is active).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSystem {
    /// Unique id
    pub id: String,
    /// Owning coach
    pub coach_id: String,
    /// Display name (e.g. "Coggan Power Zones")
    pub name: String,
    /// Sport these zones apply to
    pub sport_type: SportType,
    /// Reference metric the percentages scale
    pub reference_type: ZoneReferenceType,
    /// Human-readable reference name (e.g. "FTP")
    pub reference_name: String,
    /// Ordered zones, labels unique within the system
    pub zones: Vec<Zone>,
    /// Preferred system for this coach+sport
    #[serde(default)]
    pub active: bool,
    /// Fallback system when none is active
    #[serde(default)]
    pub is_default: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl ZoneSystem {
    /// Create a zone system owned by a coach
    #[must_use]
    pub fn new(
        coach_id: impl Into<String>,
        name: impl Into<String>,
        sport_type: SportType,
        reference_type: ZoneReferenceType,
        reference_name: impl Into<String>,
        zones: Vec<Zone>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            coach_id: coach_id.into(),
            name: name.into(),
            sport_type,
            reference_type,
            reference_name: reference_name.into(),
            zones,
            active: false,
            is_default: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Find a zone by label, case-insensitively
    #[must_use]
    pub fn find_zone(&self, label: &str) -> Option<&Zone> {
        self.zones
            .iter()
            .find(|zone| zone.label.eq_ignore_ascii_case(label))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn system_with_zone(label: &str) -> ZoneSystem {
        ZoneSystem::new(
            "coach-1",
            "Power Zones",
            SportType::Cycling,
            ZoneReferenceType::Ftp,
            "FTP",
            vec![Zone {
                label: label.to_owned(),
                low: 91,
                high: 105,
                description: None,
            }],
        )
    }

    #[test]
    fn zone_lookup_ignores_case() {
        let system = system_with_zone("Z4");
        assert!(system.find_zone("z4").is_some());
        assert!(system.find_zone("Z4").is_some());
        assert!(system.find_zone("Z5").is_none());
    }

    #[test]
    fn midpoint_is_band_average() {
        let system = system_with_zone("Z4");
        let zone = system.find_zone("Z4").unwrap();
        assert!((zone.midpoint_percent() - 98.0).abs() < f64::EPSILON);
    }
}
