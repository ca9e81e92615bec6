// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Segment and segment effort records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Segment {
    pub id: u64,
    pub resource_state: Option<u8>,
    pub name: Option<String>,
    pub activity_type: Option<String>,
    /// Distance in meters
    pub distance: Option<f64>,
    pub average_grade: Option<f64>,
    pub city: Option<String>,
    pub starred: Option<bool>,
    pub effort_count: Option<u64>,
}

/// One athlete's attempt at a segment.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SegmentEffort {
    pub id: u64,
    pub name: Option<String>,
    pub activity: Option<EffortActivity>,
    pub elapsed_time: Option<u64>,
    pub moving_time: Option<u64>,
    pub start_date: Option<DateTime<Utc>>,
    pub distance: Option<f64>,
    pub kom_rank: Option<u32>,
    pub pr_rank: Option<u32>,
    pub segment: Option<Segment>,
}

/// Activity reference embedded in an effort.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EffortActivity {
    pub id: u64,
}
