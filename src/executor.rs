// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared call path for every service operation.
//!
//! Each call goes through the same steps:
//! 1. Scope precheck (no request is sent when the token lacks a declared scope)
//! 2. Paging validation for list operations
//! 3. Dispatch via the [`Transport`]
//! 4. Status classification per call kind
//! 5. JSON decoding of the payload
//!
//! Nothing here retries. Every failure is returned to the caller.

use crate::error::{ApiError, ErrorBody, Result};
use crate::models::AuthorisationScope;
use crate::paging::{PageLimits, PagePlan, PageParams, Paging};
use crate::token::Token;
use crate::transport::{ApiRequest, ApiResponse, RequestBody, Transport};
use reqwest::Method;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// How an operation treats a 404 and an empty body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// Single resource read; 404 means absent.
    Fetch,
    /// Top-level collection; 404 means empty.
    List,
    /// Collection owned by another resource; 404 (missing parent) means absent.
    SubList,
    Create,
    Update,
    Delete,
}

impl CallKind {
    pub fn is_list(&self) -> bool {
        matches!(self, CallKind::List | CallKind::SubList)
    }

    pub fn is_mutation(&self) -> bool {
        matches!(self, CallKind::Create | CallKind::Update | CallKind::Delete)
    }
}

/// Successful result of a call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Value(T),
    /// 2xx with no body, or a list with nothing in it.
    Empty,
    /// The resource (or the parent of a sub-collection) does not exist.
    Absent,
}

impl<T> Outcome<T> {
    /// Value of a single-resource read; absent and empty both map to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Value(value) => Some(value),
            Outcome::Empty | Outcome::Absent => None,
        }
    }

    /// Value required by a mutation; an empty body is a protocol error.
    pub fn into_value(self) -> Result<T> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Empty | Outcome::Absent => Err(ApiError::transport(
                None,
                "Strava returned an empty response body",
            )),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Value(value) => Outcome::Value(f(value)),
            Outcome::Empty => Outcome::Empty,
            Outcome::Absent => Outcome::Absent,
        }
    }
}

impl<T> Outcome<Vec<T>> {
    /// Items of a top-level list; never fails for "nothing there".
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Outcome::Value(items) => items,
            Outcome::Empty | Outcome::Absent => Vec::new(),
        }
    }

    /// Items of a sub-collection: `None` if the parent is missing.
    pub fn into_sub_list(self) -> Option<Vec<T>> {
        match self {
            Outcome::Value(items) => Some(items),
            Outcome::Empty => Some(Vec::new()),
            Outcome::Absent => None,
        }
    }
}

/// Description of one API call, built by the service wrappers.
#[derive(Debug, Clone)]
pub struct Operation {
    kind: CallKind,
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: RequestBody,
    required_scope: Option<AuthorisationScope>,
}

impl Operation {
    fn new(kind: CallKind, method: Method, path: impl Into<String>) -> Self {
        let required_scope = kind.is_mutation().then_some(AuthorisationScope::Write);
        Self {
            kind,
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            required_scope,
        }
    }

    pub fn fetch(path: impl Into<String>) -> Self {
        Self::new(CallKind::Fetch, Method::GET, path)
    }

    pub fn list(path: impl Into<String>) -> Self {
        Self::new(CallKind::List, Method::GET, path)
    }

    pub fn sub_list(path: impl Into<String>) -> Self {
        Self::new(CallKind::SubList, Method::GET, path)
    }

    /// `POST`, requires `Write` unless overridden.
    pub fn create(path: impl Into<String>) -> Self {
        Self::new(CallKind::Create, Method::POST, path)
    }

    /// `PUT`, requires `Write` unless overridden.
    pub fn update(path: impl Into<String>) -> Self {
        Self::new(CallKind::Update, Method::PUT, path)
    }

    /// `DELETE`, requires `Write` unless overridden.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(CallKind::Delete, Method::DELETE, path)
    }

    /// Replace the scope the token must carry; `None` disables the precheck.
    pub fn with_required_scope(mut self, scope: Option<AuthorisationScope>) -> Self {
        self.required_scope = scope;
        self
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Usage(format!("Unserializable request body: {}", e)))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Set `page`/`per_page`, replacing any earlier values.
    fn with_page(&self, page: PageParams) -> Self {
        let mut op = self.clone();
        op.query.retain(|(k, _)| k != "page" && k != "per_page");
        op.query.push(("page".to_string(), page.page.to_string()));
        op.query.push(("per_page".to_string(), page.per_page.to_string()));
        op
    }

    pub fn kind(&self) -> CallKind {
        self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn required_scope(&self) -> Option<AuthorisationScope> {
        self.required_scope
    }
}

/// Map an HTTP status and body onto an outcome for a call of `kind`.
///
/// | Status | Result |
/// |---|---|
/// | 2xx with body | `Value(body)` |
/// | 2xx, blank body | `Empty` |
/// | 404 | `Absent` (fetch, sub-list), `Empty` (list), `NotFound` (mutations) |
/// | 401 | `Unauthorized` |
/// | 400 with Strava error body | `BadRequest` with field errors |
/// | anything else | `Transport` carrying the status |
pub fn classify(kind: CallKind, status: u16, body: &str) -> Result<Outcome<&str>> {
    match status {
        200..=299 if body.trim().is_empty() => Ok(Outcome::Empty),
        200..=299 => Ok(Outcome::Value(body)),
        404 => match kind {
            CallKind::Fetch | CallKind::SubList => Ok(Outcome::Absent),
            CallKind::List => Ok(Outcome::Empty),
            CallKind::Create | CallKind::Update | CallKind::Delete => {
                Err(ApiError::NotFound(error_message(body, "Record Not Found")))
            }
        },
        401 => Err(ApiError::Unauthorized(error_message(body, "Authorization Error"))),
        400 => match serde_json::from_str::<ErrorBody>(body) {
            Ok(error) => Err(ApiError::BadRequest {
                message: error.message,
                errors: error.errors,
            }),
            Err(_) => Err(ApiError::transport(Some(status), format!("HTTP 400: {}", body))),
        },
        _ => Err(ApiError::transport(
            Some(status),
            format!("HTTP {}: {}", status, body),
        )),
    }
}

fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|error| error.message)
        .unwrap_or_else(|_| fallback.to_string())
}

/// Executes operations for service handles; cheap to clone.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
    limits: PageLimits,
}

impl RequestExecutor {
    pub fn new(transport: Arc<dyn Transport>, limits: PageLimits) -> Self {
        Self { transport, limits }
    }

    pub fn limits(&self) -> PageLimits {
        self.limits
    }

    /// Run a single call and decode its payload as `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        token: &Token,
        op: &Operation,
    ) -> Result<Outcome<T>> {
        authorize(token, op)?;

        let request = ApiRequest {
            method: op.method.clone(),
            path: op.path.clone(),
            query: op.query.clone(),
            body: op.body.clone(),
            authorization: token.authorization_header(),
        };

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            "Sending Strava API request"
        );

        let response = self.transport.send(&request).await.map_err(|e| {
            tracing::warn!(path = %request.path, error = %e, "Strava API request failed");
            ApiError::transport(None, e.to_string())
        })?;

        let ApiResponse { status, body } = response;
        tracing::debug!(path = %request.path, status, "Strava API response");

        match status {
            401 => tracing::warn!(path = %request.path, "Strava rejected access token (401)"),
            ApiError::RATE_LIMIT_STATUS => tracing::warn!("Strava rate limit hit (429)"),
            _ => {}
        }

        match classify(op.kind, status, &body)? {
            Outcome::Value(text) => serde_json::from_str(text).map(Outcome::Value).map_err(|e| {
                ApiError::transport(Some(status), format!("JSON parse error: {}", e))
            }),
            Outcome::Empty => Ok(Outcome::Empty),
            Outcome::Absent => Ok(Outcome::Absent),
        }
    }

    /// Run a call whose response body is not needed.
    pub async fn execute_unit(&self, token: &Token, op: &Operation) -> Result<()> {
        self.execute::<IgnoredAny>(token, op).await.map(|_| ())
    }

    /// Run a list operation under `paging`.
    ///
    /// `None` fetches every page at the default size and concatenates them;
    /// iteration stops at the first page shorter than the page size. A
    /// listing still going after `max_pages` pages fails with a transport
    /// error.
    pub async fn list<T: DeserializeOwned>(
        &self,
        token: &Token,
        op: Operation,
        paging: Option<Paging>,
    ) -> Result<Outcome<Vec<T>>> {
        authorize(token, &op)?;

        match self.limits.normalize(paging)? {
            PagePlan::Single(page) => self.execute(token, &op.with_page(page)).await,
            PagePlan::All { per_page } => self.list_all(token, &op, per_page).await,
        }
    }

    async fn list_all<T: DeserializeOwned>(
        &self,
        token: &Token,
        op: &Operation,
        per_page: u32,
    ) -> Result<Outcome<Vec<T>>> {
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            if page > self.limits.max_pages {
                tracing::warn!(
                    path = %op.path,
                    pages = self.limits.max_pages,
                    "Page limit reached"
                );
                return Err(ApiError::transport(
                    None,
                    format!(
                        "Listing {} did not end within {} pages",
                        op.path, self.limits.max_pages
                    ),
                ));
            }

            let params = PageParams { page, per_page };
            match self.execute::<Vec<T>>(token, &op.with_page(params)).await? {
                Outcome::Absent if page == 1 => return Ok(Outcome::Absent),
                Outcome::Value(batch) => {
                    let short = batch.len() < per_page as usize;
                    items.extend(batch);
                    if short {
                        break;
                    }
                }
                Outcome::Empty | Outcome::Absent => break,
            }
            page += 1;
        }

        tracing::debug!(path = %op.path, pages = page, items = items.len(), "Fetched all pages");

        if items.is_empty() {
            Ok(Outcome::Empty)
        } else {
            Ok(Outcome::Value(items))
        }
    }
}

impl fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

/// Reject locally when the token lacks the scope the operation declares.
fn authorize(token: &Token, op: &Operation) -> Result<()> {
    match op.required_scope {
        Some(scope) if !token.has_scope(scope) => {
            tracing::warn!(path = %op.path, scope = %scope, "Token lacks required scope");
            Err(ApiError::Unauthorized(format!(
                "Token does not have {} scope",
                scope
            )))
        }
        _ => Ok(()),
    }
}
