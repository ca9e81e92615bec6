// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gear (bikes and shoes).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Gear {
    /// Strava gear ids are prefixed strings ("b1234" for bikes, "g1234" for shoes)
    pub id: String,
    pub name: Option<String>,
    pub primary: Option<bool>,
    /// Distance in meters
    pub distance: Option<f64>,
    pub brand_name: Option<String>,
    pub model_name: Option<String>,
    pub description: Option<String>,
}
