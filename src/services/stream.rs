// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity, segment and effort data streams.

use super::API_PREFIX;
use crate::error::{ApiError, Result};
use crate::executor::{Operation, RequestExecutor};
use crate::models::stream::stream_keys;
use crate::models::{Stream, StreamType};
use crate::token::Token;

pub struct StreamService {
    executor: RequestExecutor,
    token: Token,
}

impl StreamService {
    pub fn new(executor: RequestExecutor, token: Token) -> Self {
        Self { executor, token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// `None` if the activity does not exist.
    pub async fn get_activity_streams(
        &self,
        activity_id: u64,
        types: &[StreamType],
    ) -> Result<Option<Vec<Stream>>> {
        self.get_streams(&format!("activities/{}", activity_id), types).await
    }

    /// `None` if the segment does not exist.
    pub async fn get_segment_streams(
        &self,
        segment_id: u64,
        types: &[StreamType],
    ) -> Result<Option<Vec<Stream>>> {
        self.get_streams(&format!("segments/{}", segment_id), types).await
    }

    /// `None` if the effort does not exist.
    pub async fn get_effort_streams(
        &self,
        effort_id: u64,
        types: &[StreamType],
    ) -> Result<Option<Vec<Stream>>> {
        self.get_streams(&format!("segment_efforts/{}", effort_id), types).await
    }

    async fn get_streams(&self, owner: &str, types: &[StreamType]) -> Result<Option<Vec<Stream>>> {
        if types.is_empty() {
            return Err(ApiError::Usage("At least one stream type is required".to_string()));
        }

        let op = Operation::sub_list(format!("{}/{}/streams", API_PREFIX, owner))
            .query("keys", stream_keys(types))
            .query("key_by_type", false);
        Ok(self.executor.execute(&self.token, &op).await?.into_sub_list())
    }
}
