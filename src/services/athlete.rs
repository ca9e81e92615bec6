// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Athlete profiles, statistics and KOMs.

use super::API_PREFIX;
use crate::error::Result;
use crate::executor::{Operation, RequestExecutor};
use crate::models::{Athlete, AthleteStats, AthleteUpdate, SegmentEffort};
use crate::paging::Paging;
use crate::token::Token;

pub struct AthleteService {
    executor: RequestExecutor,
    token: Token,
}

impl AthleteService {
    pub fn new(executor: RequestExecutor, token: Token) -> Self {
        Self { executor, token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Get authenticated athlete profile.
    pub async fn get_authenticated_athlete(&self) -> Result<Athlete> {
        let op = Operation::fetch(format!("{}/athlete", API_PREFIX));
        self.executor.execute(&self.token, &op).await?.into_value()
    }

    pub async fn get_athlete(&self, athlete_id: u64) -> Result<Option<Athlete>> {
        let op = Operation::fetch(format!("{}/athletes/{}", API_PREFIX, athlete_id));
        Ok(self.executor.execute(&self.token, &op).await?.into_option())
    }

    /// Update the authenticated athlete. Requires write access.
    pub async fn update_authenticated_athlete(&self, update: &AthleteUpdate) -> Result<Athlete> {
        let op = Operation::update(format!("{}/athlete", API_PREFIX)).json(update)?;
        self.executor.execute(&self.token, &op).await?.into_value()
    }

    pub async fn get_athlete_stats(&self, athlete_id: u64) -> Result<Option<AthleteStats>> {
        let op = Operation::fetch(format!("{}/athletes/{}/stats", API_PREFIX, athlete_id));
        Ok(self.executor.execute(&self.token, &op).await?.into_option())
    }

    /// List an athlete's KOM/QOM efforts; `None` if the athlete does not exist.
    pub async fn list_athlete_koms(
        &self,
        athlete_id: u64,
        paging: Option<Paging>,
    ) -> Result<Option<Vec<SegmentEffort>>> {
        let op = Operation::sub_list(format!("{}/athletes/{}/koms", API_PREFIX, athlete_id));
        Ok(self.executor.list(&self.token, op, paging).await?.into_sub_list())
    }
}
