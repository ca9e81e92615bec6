// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local development.

use crate::models::{AuthorisationScope, TokenResponse};
use crate::paging::{PageLimits, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::token::Token;
use std::env;

const DEFAULT_BASE_URL: &str = "https://www.strava.com";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava host; API paths are appended to it
    pub base_url: String,
    /// Page size used when a caller does not pass one
    pub default_page_size: u32,
    /// Upper bound applied to requested page sizes
    pub max_page_size: u32,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            base_url: env::var("STRAVA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            default_page_size: env::var("STRAVA_DEFAULT_PAGE_SIZE")
                .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
                .parse()
                .unwrap_or(DEFAULT_PAGE_SIZE),
            max_page_size: env::var("STRAVA_MAX_PAGE_SIZE")
                .unwrap_or_else(|_| MAX_PAGE_SIZE.to_string())
                .parse()
                .unwrap_or(MAX_PAGE_SIZE),
            request_timeout_secs: env::var("STRAVA_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn page_limits(&self) -> PageLimits {
        PageLimits::new(self.default_page_size, self.max_page_size)
    }
}

/// Build a [`Token`] from `STRAVA_ACCESS_TOKEN` and friends.
///
/// Only the access token is required. Scopes come from the comma-separated
/// `STRAVA_SCOPES` (e.g. `read,activity:write`) and default to read-only.
pub fn token_from_env() -> Result<Token, ConfigError> {
    dotenvy::dotenv().ok();

    let access_token = env::var("STRAVA_ACCESS_TOKEN")
        .map(|v| v.trim().to_string())
        .map_err(|_| ConfigError::Missing("STRAVA_ACCESS_TOKEN"))?;

    let expires_at = match env::var("STRAVA_TOKEN_EXPIRES_AT") {
        Ok(v) => v
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::Invalid("STRAVA_TOKEN_EXPIRES_AT", v))?,
        Err(_) => 0,
    };

    let scopes = match env::var("STRAVA_SCOPES") {
        Ok(v) => parse_scopes(&v)?,
        Err(_) => vec![AuthorisationScope::Read],
    };

    let response = TokenResponse {
        access_token,
        refresh_token: env::var("STRAVA_REFRESH_TOKEN").unwrap_or_default(),
        token_type: env::var("STRAVA_TOKEN_TYPE").unwrap_or_else(|_| "Bearer".to_string()),
        expires_at,
        athlete: None,
    };

    Ok(Token::from_exchange(response, scopes))
}

fn parse_scopes(value: &str) -> Result<Vec<AuthorisationScope>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<AuthorisationScope>()
                .map_err(|_| ConfigError::Invalid("STRAVA_SCOPES", s.to_string()))
        })
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
