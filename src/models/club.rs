// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Club records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Club {
    pub id: u64,
    pub resource_state: Option<u8>,
    pub name: Option<String>,
    pub sport_type: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub private: Option<bool>,
    pub member_count: Option<u32>,
}

/// Response to joining or leaving a club.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClubMembershipResponse {
    pub success: bool,
    #[serde(default)]
    pub active: bool,
    /// "member" or "pending" for private clubs
    pub membership: Option<String>,
}
