// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gear lookup.

use super::API_PREFIX;
use crate::error::Result;
use crate::executor::{Operation, RequestExecutor};
use crate::models::Gear;
use crate::token::Token;

pub struct GearService {
    executor: RequestExecutor,
    token: Token,
}

impl GearService {
    pub fn new(executor: RequestExecutor, token: Token) -> Self {
        Self { executor, token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Get gear by its string ID (e.g. `b12345`).
    pub async fn get_gear(&self, gear_id: &str) -> Result<Option<Gear>> {
        let op = Operation::fetch(format!("{}/gear/{}", API_PREFIX, urlencoding::encode(gear_id)));
        Ok(self.executor.execute(&self.token, &op).await?.into_option())
    }
}
