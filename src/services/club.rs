// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Clubs, memberships and club feeds.

use super::API_PREFIX;
use crate::error::Result;
use crate::executor::{Operation, RequestExecutor};
use crate::models::{Activity, AthleteSummary, Club, ClubMembershipResponse};
use crate::paging::Paging;
use crate::token::Token;

pub struct ClubService {
    executor: RequestExecutor,
    token: Token,
}

impl ClubService {
    pub fn new(executor: RequestExecutor, token: Token) -> Self {
        Self { executor, token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub async fn get_club(&self, club_id: u64) -> Result<Option<Club>> {
        let op = Operation::fetch(format!("{}/clubs/{}", API_PREFIX, club_id));
        Ok(self.executor.execute(&self.token, &op).await?.into_option())
    }

    pub async fn list_authenticated_athlete_clubs(
        &self,
        paging: Option<Paging>,
    ) -> Result<Vec<Club>> {
        let op = Operation::list(format!("{}/athlete/clubs", API_PREFIX));
        Ok(self.executor.list(&self.token, op, paging).await?.into_vec())
    }

    /// `None` if the club does not exist.
    pub async fn list_club_members(
        &self,
        club_id: u64,
        paging: Option<Paging>,
    ) -> Result<Option<Vec<AthleteSummary>>> {
        let op = Operation::sub_list(format!("{}/clubs/{}/members", API_PREFIX, club_id));
        Ok(self.executor.list(&self.token, op, paging).await?.into_sub_list())
    }

    /// Recent activities by club members; `None` if the club does not exist.
    pub async fn list_club_activities(
        &self,
        club_id: u64,
        paging: Option<Paging>,
    ) -> Result<Option<Vec<Activity>>> {
        let op = Operation::sub_list(format!("{}/clubs/{}/activities", API_PREFIX, club_id));
        Ok(self.executor.list(&self.token, op, paging).await?.into_sub_list())
    }

    /// Join a club. Requires write access.
    pub async fn join_club(&self, club_id: u64) -> Result<ClubMembershipResponse> {
        let op = Operation::create(format!("{}/clubs/{}/join", API_PREFIX, club_id));
        self.executor.execute(&self.token, &op).await?.into_value()
    }

    /// Leave a club. Requires write access.
    pub async fn leave_club(&self, club_id: u64) -> Result<ClubMembershipResponse> {
        let op = Operation::create(format!("{}/clubs/{}/leave", API_PREFIX, club_id));
        self.executor.execute(&self.token, &op).await?.into_value()
    }
}
