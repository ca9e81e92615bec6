// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity records and the payloads used to create or change them.

use crate::models::{AthleteSummary, SegmentEffort};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Activity as returned by Strava (summary or detailed representation).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Activity {
    pub id: u64,
    /// 1 = meta, 2 = summary, 3 = detailed
    pub resource_state: Option<u8>,
    pub name: Option<String>,
    /// Sport type (Ride, Run, Hike, etc.)
    pub sport_type: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    /// Distance in meters
    pub distance: Option<f64>,
    /// Elapsed time in seconds
    pub elapsed_time: Option<u64>,
    pub description: Option<String>,
    pub device_name: Option<String>,
    pub gear_id: Option<String>,
    pub commute: Option<bool>,
    pub trainer: Option<bool>,
    pub private: Option<bool>,
    pub athlete: Option<ActivityAthlete>,
    pub map: Option<ActivityMap>,
    pub segment_efforts: Option<Vec<SegmentEffort>>,
}

impl Activity {
    /// Get the detailed polyline, falling back to summary if not available.
    pub fn polyline(&self) -> Option<&str> {
        let map = self.map.as_ref()?;
        map.polyline.as_deref().or(map.summary_polyline.as_deref())
    }
}

/// Owner reference embedded in an activity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActivityAthlete {
    pub id: u64,
}

/// Activity map data with polylines.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActivityMap {
    pub id: Option<String>,
    pub polyline: Option<String>,
    pub summary_polyline: Option<String>,
}

/// Payload for `POST /activities` (manual entry).
#[derive(Debug, Clone, Serialize)]
pub struct NewActivity {
    pub name: String,
    pub sport_type: String,
    /// ISO 8601 local start time
    pub start_date_local: String,
    /// Elapsed time in seconds
    pub elapsed_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commute: Option<bool>,
}

/// Changes for `PUT /activities/{id}`.
///
/// Strava only accepts this set of attributes on update and silently ignores
/// anything else, so nothing outside it is ever serialized.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActivityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_from_home: Option<bool>,
    /// `Some("none")` removes the gear from the activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear_id: Option<String>,
}

impl ActivityUpdate {
    /// True when no attribute would be changed.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sport_type.is_none()
            && self.description.is_none()
            && self.commute.is_none()
            && self.trainer.is_none()
            && self.hide_from_home.is_none()
            && self.gear_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Comment {
    pub id: u64,
    pub activity_id: Option<u64>,
    pub text: String,
    pub athlete: Option<AthleteSummary>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Lap {
    pub id: u64,
    pub name: Option<String>,
    pub lap_index: Option<u32>,
    pub elapsed_time: Option<u64>,
    pub moving_time: Option<u64>,
    pub distance: Option<f64>,
}

/// Heart-rate or power zone distribution for an activity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActivityZone {
    #[serde(rename = "type")]
    pub zone_type: String,
    pub score: Option<u32>,
    pub sensor_based: Option<bool>,
    #[serde(default)]
    pub distribution_buckets: Vec<ZoneBucket>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ZoneBucket {
    pub min: f64,
    pub max: f64,
    /// Seconds spent in this bucket
    pub time: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Photo {
    pub id: Option<u64>,
    pub unique_id: Option<String>,
    pub caption: Option<String>,
    pub urls: Option<HashMap<String, String>>,
}
