// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use strava_client::models::{AuthorisationScope, TokenResponse};
use strava_client::{
    ApiRequest, ApiResponse, PageLimits, RequestExecutor, ServiceRegistry, Token, Transport,
    TransportError,
};

type Responder = dyn Fn(&ApiRequest) -> Result<ApiResponse, TransportError> + Send + Sync;

/// Transport stub that answers from a closure and records every request.
#[allow(dead_code)]
pub struct StubTransport {
    responder: Box<Responder>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ApiRequest>>,
}

#[allow(dead_code)]
impl StubTransport {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&ApiRequest) -> Result<ApiResponse, TransportError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Answer every request with the same status and body.
    pub fn fixed(status: u16, body: &str) -> Arc<Self> {
        let body = body.to_string();
        Self::new(move |_| Ok(ApiResponse::new(status, body.clone())))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        (self.responder)(request)
    }
}

/// Provider holding `total` activities with ids `1..=total`, served by page.
#[allow(dead_code)]
pub fn paged_activities(total: u64) -> Arc<StubTransport> {
    StubTransport::new(move |request| {
        let page: u64 = request.query_value("page").unwrap_or("1").parse().unwrap();
        let per_page: u64 = request.query_value("per_page").unwrap_or("30").parse().unwrap();
        let start = (page - 1) * per_page + 1;
        let end = (start + per_page - 1).min(total);
        let items: Vec<serde_json::Value> = (start..=end)
            .map(|id| serde_json::json!({ "id": id, "name": format!("Activity {}", id) }))
            .collect();
        Ok(ApiResponse::new(200, serde_json::to_string(&items).unwrap()))
    })
}

#[allow(dead_code)]
pub fn executor(transport: Arc<StubTransport>) -> RequestExecutor {
    RequestExecutor::new(transport, PageLimits::default())
}

#[allow(dead_code)]
pub fn registry(transport: Arc<StubTransport>) -> ServiceRegistry {
    ServiceRegistry::new(executor(transport))
}

#[allow(dead_code)]
pub fn token_with_scopes(access_token: &str, scopes: &[AuthorisationScope]) -> Token {
    let response = TokenResponse {
        access_token: access_token.to_string(),
        refresh_token: format!("{}-refresh", access_token),
        token_type: "Bearer".to_string(),
        expires_at: 1_900_000_000,
        athlete: None,
    };
    Token::from_exchange(response, scopes.iter().copied())
}

/// Token that can read and write.
#[allow(dead_code)]
pub fn write_token() -> Token {
    token_with_scopes(
        "write-token",
        &[AuthorisationScope::Read, AuthorisationScope::Write],
    )
}

#[allow(dead_code)]
pub fn read_only_token() -> Token {
    token_with_scopes("read-token", &[AuthorisationScope::Read])
}
