// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Segments, starring and segment leader efforts.

use super::API_PREFIX;
use crate::error::Result;
use crate::executor::{Operation, RequestExecutor};
use crate::models::{Segment, SegmentEffort};
use crate::paging::Paging;
use crate::token::Token;
use crate::transport::RequestBody;

pub struct SegmentService {
    executor: RequestExecutor,
    token: Token,
}

impl SegmentService {
    pub fn new(executor: RequestExecutor, token: Token) -> Self {
        Self { executor, token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub async fn get_segment(&self, segment_id: u64) -> Result<Option<Segment>> {
        let op = Operation::fetch(format!("{}/segments/{}", API_PREFIX, segment_id));
        Ok(self.executor.execute(&self.token, &op).await?.into_option())
    }

    /// Segments starred by the authenticated athlete.
    pub async fn list_starred_segments(&self, paging: Option<Paging>) -> Result<Vec<Segment>> {
        let op = Operation::list(format!("{}/segments/starred", API_PREFIX));
        Ok(self.executor.list(&self.token, op, paging).await?.into_vec())
    }

    /// Star or unstar a segment. Requires write access.
    pub async fn star_segment(&self, segment_id: u64, starred: bool) -> Result<Segment> {
        let op = Operation::update(format!("{}/segments/{}/starred", API_PREFIX, segment_id))
            .body(RequestBody::Form(vec![("starred".to_string(), starred.to_string())]));
        self.executor.execute(&self.token, &op).await?.into_value()
    }

    /// All efforts on a segment; `None` if the segment does not exist.
    pub async fn list_segment_efforts(
        &self,
        segment_id: u64,
        paging: Option<Paging>,
    ) -> Result<Option<Vec<SegmentEffort>>> {
        let op = Operation::sub_list(format!("{}/segments/{}/all_efforts", API_PREFIX, segment_id));
        Ok(self.executor.list(&self.token, op, paging).await?.into_sub_list())
    }
}
