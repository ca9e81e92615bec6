// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Token management: revoking the application's access.

use crate::error::Result;
use crate::executor::{Operation, RequestExecutor};
use crate::models::DeauthorisationResponse;
use crate::token::Token;

pub struct TokenService {
    executor: RequestExecutor,
    token: Token,
}

impl TokenService {
    pub fn new(executor: RequestExecutor, token: Token) -> Self {
        Self { executor, token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Deauthorize the application for this token's athlete.
    ///
    /// POST https://www.strava.com/oauth/deauthorize
    ///
    /// This invalidates all access and refresh tokens for the athlete. Cached
    /// service handles for the token stay in the registry until removed; any
    /// further call through them fails with `Unauthorized`.
    pub async fn deauthorise(&self) -> Result<DeauthorisationResponse> {
        let op = Operation::create("/oauth/deauthorize").with_required_scope(None);
        let response = self.executor.execute(&self.token, &op).await?.into_value()?;
        tracing::info!("Strava deauthorization successful");
        Ok(response)
    }
}
