// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity file uploads.

use serde::{Deserialize, Serialize};

/// File to upload as a new activity.
#[derive(Debug, Clone)]
pub struct NewUpload {
    /// One of fit, fit.gz, tcx, tcx.gz, gpx, gpx.gz
    pub data_type: String,
    pub file_name: String,
    pub data: Vec<u8>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub external_id: Option<String>,
}

/// Processing status of an upload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadStatus {
    pub id: u64,
    pub external_id: Option<String>,
    pub error: Option<String>,
    pub status: Option<String>,
    /// Set once Strava has turned the upload into an activity
    pub activity_id: Option<u64>,
}

impl UploadStatus {
    pub fn is_complete(&self) -> bool {
        self.activity_id.is_some()
    }
}
