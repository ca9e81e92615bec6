// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw data streams recorded with an activity, segment or effort.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stream channel to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamType {
    Time,
    Distance,
    LatLng,
    Altitude,
    VelocitySmooth,
    Heartrate,
    Cadence,
    Watts,
    Temp,
    Moving,
    GradeSmooth,
}

impl StreamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamType::Time => "time",
            StreamType::Distance => "distance",
            StreamType::LatLng => "latlng",
            StreamType::Altitude => "altitude",
            StreamType::VelocitySmooth => "velocity_smooth",
            StreamType::Heartrate => "heartrate",
            StreamType::Cadence => "cadence",
            StreamType::Watts => "watts",
            StreamType::Temp => "temp",
            StreamType::Moving => "moving",
            StreamType::GradeSmooth => "grade_smooth",
        }
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comma-separated `keys` parameter for a stream request.
pub(crate) fn stream_keys(types: &[StreamType]) -> String {
    types
        .iter()
        .map(StreamType::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Stream {
    #[serde(rename = "type")]
    pub stream_type: String,
    /// Samples; shape depends on the stream type (numbers, pairs, booleans)
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
    pub series_type: Option<String>,
    pub original_size: Option<u64>,
    pub resolution: Option<String>,
}
