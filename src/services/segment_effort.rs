// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Individual segment efforts.

use super::API_PREFIX;
use crate::error::Result;
use crate::executor::{Operation, RequestExecutor};
use crate::models::SegmentEffort;
use crate::token::Token;

pub struct SegmentEffortService {
    executor: RequestExecutor,
    token: Token,
}

impl SegmentEffortService {
    pub fn new(executor: RequestExecutor, token: Token) -> Self {
        Self { executor, token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub async fn get_segment_effort(&self, effort_id: u64) -> Result<Option<SegmentEffort>> {
        let op = Operation::fetch(format!("{}/segment_efforts/{}", API_PREFIX, effort_id));
        Ok(self.executor.execute(&self.token, &op).await?.into_option())
    }
}
