// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Athlete records.

use serde::{Deserialize, Serialize};

/// Athlete info as embedded in tokens, kudos and club member lists.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AthleteSummary {
    pub id: u64,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    pub profile: Option<String>,
}

/// Detailed athlete profile.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Athlete {
    pub id: u64,
    pub resource_state: Option<u8>,
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub sex: Option<String>,
    pub premium: Option<bool>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    pub profile: Option<String>,
}

/// Fields the authenticated athlete may change on their own profile.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AthleteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Rolled-up totals for one sport over a period.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActivityTotals {
    pub count: u32,
    pub distance: f64,
    pub moving_time: u64,
    pub elapsed_time: u64,
    pub elevation_gain: f64,
}

/// Athlete statistics.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AthleteStats {
    pub biggest_ride_distance: Option<f64>,
    pub biggest_climb_elevation_gain: Option<f64>,
    pub recent_ride_totals: Option<ActivityTotals>,
    pub recent_run_totals: Option<ActivityTotals>,
    pub ytd_ride_totals: Option<ActivityTotals>,
    pub ytd_run_totals: Option<ActivityTotals>,
    pub all_ride_totals: Option<ActivityTotals>,
    pub all_run_totals: Option<ActivityTotals>,
}
