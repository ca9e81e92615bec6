// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth exchange records and authorisation scopes.

use crate::models::AthleteSummary;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scope granted to an access token during authorisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorisationScope {
    /// Public data only.
    Read,
    /// Private activities and profile data.
    ViewPrivate,
    /// Create, update and delete on behalf of the athlete.
    Write,
}

impl AuthorisationScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorisationScope::Read => "read",
            AuthorisationScope::ViewPrivate => "view_private",
            AuthorisationScope::Write => "write",
        }
    }
}

impl fmt::Display for AuthorisationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthorisationScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "read" | "public" => Ok(AuthorisationScope::Read),
            "view_private" | "read_all" | "activity:read_all" => {
                Ok(AuthorisationScope::ViewPrivate)
            }
            "write" | "activity:write" => Ok(AuthorisationScope::Write),
            other => Err(format!("unknown authorisation scope '{}'", other)),
        }
    }
}

/// Token exchange response from Strava OAuth (includes athlete info).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Seconds since the epoch when the access token expires.
    #[serde(default)]
    pub expires_at: i64,
    #[serde(default)]
    pub athlete: Option<AthleteSummary>,
}

/// Token refresh response from Strava.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
}

/// Response to `POST /oauth/deauthorize`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeauthorisationResponse {
    pub access_token: String,
}

pub(crate) fn default_token_type() -> String {
    "Bearer".to_string()
}
