// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities and their comments, kudos, laps, zones and photos.

use super::API_PREFIX;
use crate::error::Result;
use crate::executor::{Operation, RequestExecutor};
use crate::models::{
    Activity, ActivityUpdate, ActivityZone, AthleteSummary, Comment, Lap, NewActivity, Photo,
};
use crate::paging::Paging;
use crate::token::Token;
use chrono::{DateTime, Utc};

/// Activity operations bound to one token.
pub struct ActivityService {
    executor: RequestExecutor,
    token: Token,
}

impl ActivityService {
    pub fn new(executor: RequestExecutor, token: Token) -> Self {
        Self { executor, token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Get an activity by ID, including all segment efforts.
    ///
    /// Returns `None` if the activity does not exist.
    pub async fn get_activity(&self, activity_id: u64) -> Result<Option<Activity>> {
        let op = Operation::fetch(format!("{}/activities/{}", API_PREFIX, activity_id))
            .query("include_all_efforts", true);
        Ok(self.executor.execute(&self.token, &op).await?.into_option())
    }

    /// List the authenticated athlete's activities, newest first.
    ///
    /// `before`/`after` filter on start date. `paging: None` returns every page.
    pub async fn list_authenticated_athlete_activities(
        &self,
        before: Option<DateTime<Utc>>,
        after: Option<DateTime<Utc>>,
        paging: Option<Paging>,
    ) -> Result<Vec<Activity>> {
        let op = Operation::list(format!("{}/athlete/activities", API_PREFIX))
            .query_opt("before", before.map(|d| d.timestamp()))
            .query_opt("after", after.map(|d| d.timestamp()));
        Ok(self.executor.list(&self.token, op, paging).await?.into_vec())
    }

    /// List recent activities by athletes the authenticated athlete follows.
    pub async fn list_friends_activities(&self, paging: Option<Paging>) -> Result<Vec<Activity>> {
        let op = Operation::list(format!("{}/activities/following", API_PREFIX));
        Ok(self.executor.list(&self.token, op, paging).await?.into_vec())
    }

    /// Create a manually entered activity. Requires write access.
    pub async fn create_manual_activity(&self, activity: &NewActivity) -> Result<Activity> {
        let op = Operation::create(format!("{}/activities", API_PREFIX)).json(activity)?;
        self.executor.execute(&self.token, &op).await?.into_value()
    }

    /// Update an activity. Requires write access.
    pub async fn update_activity(
        &self,
        activity_id: u64,
        update: &ActivityUpdate,
    ) -> Result<Activity> {
        let op =
            Operation::update(format!("{}/activities/{}", API_PREFIX, activity_id)).json(update)?;
        self.executor.execute(&self.token, &op).await?.into_value()
    }

    /// Delete an activity. Requires write access.
    pub async fn delete_activity(&self, activity_id: u64) -> Result<()> {
        let op = Operation::delete(format!("{}/activities/{}", API_PREFIX, activity_id));
        self.executor.execute_unit(&self.token, &op).await
    }

    /// List comments on an activity; `None` if the activity does not exist.
    pub async fn list_activity_comments(
        &self,
        activity_id: u64,
        markdown: bool,
        paging: Option<Paging>,
    ) -> Result<Option<Vec<Comment>>> {
        let op = Operation::sub_list(format!("{}/activities/{}/comments", API_PREFIX, activity_id))
            .query("markdown", markdown);
        Ok(self.executor.list(&self.token, op, paging).await?.into_sub_list())
    }

    /// Comment on an activity. Requires write access.
    pub async fn create_comment(&self, activity_id: u64, text: &str) -> Result<Comment> {
        let op = Operation::create(format!("{}/activities/{}/comments", API_PREFIX, activity_id))
            .query("text", text);
        self.executor.execute(&self.token, &op).await?.into_value()
    }

    /// Delete a comment. Requires write access.
    pub async fn delete_comment(&self, activity_id: u64, comment_id: u64) -> Result<()> {
        let op = Operation::delete(format!(
            "{}/activities/{}/comments/{}",
            API_PREFIX, activity_id, comment_id
        ));
        self.executor.execute_unit(&self.token, &op).await
    }

    /// Give kudos to an activity. Requires write access.
    pub async fn give_kudos(&self, activity_id: u64) -> Result<()> {
        let op = Operation::create(format!("{}/activities/{}/kudos", API_PREFIX, activity_id));
        self.executor.execute_unit(&self.token, &op).await
    }

    /// List athletes who gave kudos; `None` if the activity does not exist.
    pub async fn list_activity_kudoers(
        &self,
        activity_id: u64,
        paging: Option<Paging>,
    ) -> Result<Option<Vec<AthleteSummary>>> {
        let op = Operation::sub_list(format!("{}/activities/{}/kudos", API_PREFIX, activity_id));
        Ok(self.executor.list(&self.token, op, paging).await?.into_sub_list())
    }

    pub async fn list_activity_laps(&self, activity_id: u64) -> Result<Option<Vec<Lap>>> {
        let op = Operation::sub_list(format!("{}/activities/{}/laps", API_PREFIX, activity_id));
        Ok(self.executor.execute(&self.token, &op).await?.into_sub_list())
    }

    /// Heart-rate and power zones (Strava premium feature).
    pub async fn list_activity_zones(&self, activity_id: u64) -> Result<Option<Vec<ActivityZone>>> {
        let op = Operation::sub_list(format!("{}/activities/{}/zones", API_PREFIX, activity_id));
        Ok(self.executor.execute(&self.token, &op).await?.into_sub_list())
    }

    pub async fn list_activity_photos(&self, activity_id: u64) -> Result<Option<Vec<Photo>>> {
        let op = Operation::sub_list(format!("{}/activities/{}/photos", API_PREFIX, activity_id))
            .query("photo_sources", true);
        Ok(self.executor.execute(&self.token, &op).await?.into_sub_list())
    }
}
