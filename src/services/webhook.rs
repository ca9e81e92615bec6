// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Webhook (push) subscription management.
//!
//! Subscriptions belong to the application, so these calls authenticate with
//! client credentials and need no athlete scope.

use super::API_PREFIX;
use crate::error::Result;
use crate::executor::{Operation, RequestExecutor};
use crate::models::{ClientCredentials, NewSubscription, Subscription};
use crate::token::Token;
use crate::transport::RequestBody;

pub struct WebhookService {
    executor: RequestExecutor,
    token: Token,
}

impl WebhookService {
    pub fn new(executor: RequestExecutor, token: Token) -> Self {
        Self { executor, token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub async fn list_subscriptions(
        &self,
        client: &ClientCredentials,
    ) -> Result<Vec<Subscription>> {
        let op = Operation::list(format!("{}/push_subscriptions", API_PREFIX))
            .query("client_id", &client.client_id)
            .query("client_secret", &client.client_secret);
        Ok(self.executor.execute(&self.token, &op).await?.into_vec())
    }

    pub async fn create_subscription(
        &self,
        client: &ClientCredentials,
        subscription: &NewSubscription,
    ) -> Result<Subscription> {
        let form = vec![
            ("client_id".to_string(), client.client_id.clone()),
            ("client_secret".to_string(), client.client_secret.clone()),
            ("callback_url".to_string(), subscription.callback_url.clone()),
            ("verify_token".to_string(), subscription.verify_token.clone()),
        ];
        let op = Operation::create(format!("{}/push_subscriptions", API_PREFIX))
            .with_required_scope(None)
            .body(RequestBody::Form(form));
        self.executor.execute(&self.token, &op).await?.into_value()
    }

    pub async fn delete_subscription(
        &self,
        client: &ClientCredentials,
        subscription_id: u64,
    ) -> Result<()> {
        let op = Operation::delete(format!("{}/push_subscriptions/{}", API_PREFIX, subscription_id))
            .with_required_scope(None)
            .query("client_id", &client.client_id)
            .query("client_secret", &client.client_secret);
        self.executor.execute_unit(&self.token, &op).await
    }
}
