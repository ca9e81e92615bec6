// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access token that scopes every API call.
//!
//! A [`Token`] is built once from an OAuth exchange result and never mutated.
//! Refreshing produces a new token (and therefore a new registry key).
//! Scopes are advisory: they are what was requested at authorisation time,
//! and the athlete may have revoked access since. Strava reports that with a
//! 401 on the next call.

use crate::models::{AthleteSummary, AuthorisationScope, TokenRefreshResponse, TokenResponse};
use crate::time_utils::{format_utc_rfc3339, from_epoch_secs};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeSet;
use std::fmt;

/// Margin before token expiration when we proactively refresh (5 minutes).
const TOKEN_REFRESH_MARGIN_SECS: i64 = 5 * 60;

/// OAuth access token plus the scopes it was granted.
#[derive(Clone)]
pub struct Token {
    access_token: String,
    refresh_token: String,
    token_type: String,
    expires_at: DateTime<Utc>,
    scopes: BTreeSet<AuthorisationScope>,
    athlete: Option<AthleteSummary>,
}

impl Token {
    /// Build a token from an exchange result, recording `scopes` as granted.
    pub fn from_exchange(
        response: TokenResponse,
        scopes: impl IntoIterator<Item = AuthorisationScope>,
    ) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            token_type: response.token_type,
            expires_at: from_epoch_secs(response.expires_at),
            scopes: scopes.into_iter().collect(),
            athlete: response.athlete,
        }
    }

    /// New token carrying refreshed credentials; scopes and athlete carry over.
    pub fn refreshed(&self, response: TokenRefreshResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            token_type: self.token_type.clone(),
            expires_at: from_epoch_secs(response.expires_at),
            scopes: self.scopes.clone(),
            athlete: self.athlete.clone(),
        }
    }

    /// Cache identity of this token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn scopes(&self) -> &BTreeSet<AuthorisationScope> {
        &self.scopes
    }

    pub fn athlete(&self) -> Option<&AthleteSummary> {
        self.athlete.as_ref()
    }

    pub fn has_scope(&self, scope: AuthorisationScope) -> bool {
        self.scopes.contains(&scope)
    }

    pub fn has_write_access(&self) -> bool {
        self.has_scope(AuthorisationScope::Write)
    }

    pub fn has_view_private(&self) -> bool {
        self.has_scope(AuthorisationScope::ViewPrivate)
    }

    /// Value for the `Authorization` header, e.g. `Bearer abc123`.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    /// True if the token expires within five minutes of `now`.
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(TOKEN_REFRESH_MARGIN_SECS) >= self.expires_at
    }
}

/// Identity plus everything that would reveal a stale or tampered copy.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.access_token == other.access_token
            && self.refresh_token == other.refresh_token
            && self.token_type == other.token_type
            && self.scopes == other.scopes
            && self.athlete == other.athlete
    }
}

impl Eq for Token {}

// Secrets stay out of logs.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("token_type", &self.token_type)
            .field("expires_at", &format_utc_rfc3339(self.expires_at))
            .field("scopes", &self.scopes)
            .field("athlete_id", &self.athlete.as_ref().map(|a| a.id))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchange(access_token: &str) -> TokenResponse {
        TokenResponse {
            access_token: access_token.to_string(),
            refresh_token: "refresh".to_string(),
            token_type: "Bearer".to_string(),
            expires_at: 1_700_000_000,
            athlete: Some(AthleteSummary {
                id: 42,
                firstname: "Ada".to_string(),
                lastname: "Lovelace".to_string(),
                profile: None,
            }),
        }
    }

    #[test]
    fn test_from_exchange_copies_fields() {
        let token = Token::from_exchange(exchange("abc"), [AuthorisationScope::Write]);
        assert_eq!(token.access_token(), "abc");
        assert_eq!(token.refresh_token(), "refresh");
        assert_eq!(token.token_type(), "Bearer");
        assert_eq!(token.expires_at().timestamp(), 1_700_000_000);
        assert_eq!(token.athlete().map(|a| a.id), Some(42));
        assert_eq!(token.authorization_header(), "Bearer abc");
    }

    #[test]
    fn test_scope_queries() {
        let token = Token::from_exchange(
            exchange("abc"),
            [AuthorisationScope::ViewPrivate, AuthorisationScope::Write],
        );
        assert!(token.has_write_access());
        assert!(token.has_view_private());

        let read_only = Token::from_exchange(exchange("abc"), []);
        assert!(!read_only.has_write_access());
        assert!(!read_only.has_view_private());
        assert!(!read_only.has_scope(AuthorisationScope::Read));
    }

    #[test]
    fn test_equality_detects_scope_drift() {
        let a = Token::from_exchange(exchange("abc"), [AuthorisationScope::Write]);
        let b = Token::from_exchange(exchange("abc"), [AuthorisationScope::Write]);
        let c = Token::from_exchange(exchange("abc"), []);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.access_token(), c.access_token());
    }

    #[test]
    fn test_refreshed_is_a_new_token() {
        let original = Token::from_exchange(exchange("old"), [AuthorisationScope::Write]);
        let refreshed = original.refreshed(TokenRefreshResponse {
            access_token: "new".to_string(),
            refresh_token: "new_refresh".to_string(),
            expires_at: 1_800_000_000,
        });
        assert_eq!(original.access_token(), "old");
        assert_eq!(refreshed.access_token(), "new");
        assert!(refreshed.has_write_access());
        assert_eq!(refreshed.athlete().map(|a| a.id), Some(42));
    }

    #[test]
    fn test_needs_refresh_uses_margin() {
        let token = Token::from_exchange(exchange("abc"), []);
        let expiry = token.expires_at();
        assert!(!token.needs_refresh(expiry - Duration::minutes(10)));
        assert!(token.needs_refresh(expiry - Duration::minutes(4)));
        assert!(token.needs_refresh(expiry + Duration::minutes(1)));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let token = Token::from_exchange(exchange("super_secret"), []);
        let debug = format!("{:?}", token);
        assert!(!debug.contains("super_secret"));
        assert!(!debug.contains("refresh"));
    }
}
