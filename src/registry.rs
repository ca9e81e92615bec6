// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-token cache of service handles.
//!
//! Handles are keyed by (access token string, service kind). The outer map is
//! keyed by access token, the inner map by [`ServiceKind`], and each inner
//! slot is a `OnceLock` so that concurrent first requests for the same key
//! construct exactly one handle while other keys proceed independently.
//!
//! The registry never checks whether a token is still valid. A handle for a
//! revoked token is returned from cache as usual; the revocation shows up as
//! `ApiError::Unauthorized` on the first call made through it.

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::executor::RequestExecutor;
use crate::services::{
    ActivityService, AthleteService, ClubService, GearService, SegmentEffortService,
    SegmentService, StreamService, TokenService, UploadService, WebhookService,
};
use crate::token::Token;
use crate::transport::{ReqwestTransport, TransportError};
use dashmap::DashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Resource family served by a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceKind {
    Activity,
    Athlete,
    Club,
    Gear,
    Segment,
    SegmentEffort,
    Stream,
    Upload,
    Webhook,
    Token,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 10] = [
        ServiceKind::Activity,
        ServiceKind::Athlete,
        ServiceKind::Club,
        ServiceKind::Gear,
        ServiceKind::Segment,
        ServiceKind::SegmentEffort,
        ServiceKind::Stream,
        ServiceKind::Upload,
        ServiceKind::Webhook,
        ServiceKind::Token,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Activity => "activity",
            ServiceKind::Athlete => "athlete",
            ServiceKind::Club => "club",
            ServiceKind::Gear => "gear",
            ServiceKind::Segment => "segment",
            ServiceKind::SegmentEffort => "segment_effort",
            ServiceKind::Stream => "stream",
            ServiceKind::Upload => "upload",
            ServiceKind::Webhook => "webhook",
            ServiceKind::Token => "token",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service handle of any kind. Cloning shares the underlying service.
#[derive(Clone)]
pub enum ServiceHandle {
    Activity(Arc<ActivityService>),
    Athlete(Arc<AthleteService>),
    Club(Arc<ClubService>),
    Gear(Arc<GearService>),
    Segment(Arc<SegmentService>),
    SegmentEffort(Arc<SegmentEffortService>),
    Stream(Arc<StreamService>),
    Upload(Arc<UploadService>),
    Webhook(Arc<WebhookService>),
    Token(Arc<TokenService>),
}

impl ServiceHandle {
    /// Construct a fresh handle of `kind` bound to `token`.
    pub fn new(kind: ServiceKind, executor: RequestExecutor, token: Token) -> Self {
        match kind {
            ServiceKind::Activity => {
                Self::Activity(Arc::new(ActivityService::new(executor, token)))
            }
            ServiceKind::Athlete => Self::Athlete(Arc::new(AthleteService::new(executor, token))),
            ServiceKind::Club => Self::Club(Arc::new(ClubService::new(executor, token))),
            ServiceKind::Gear => Self::Gear(Arc::new(GearService::new(executor, token))),
            ServiceKind::Segment => Self::Segment(Arc::new(SegmentService::new(executor, token))),
            ServiceKind::SegmentEffort => {
                Self::SegmentEffort(Arc::new(SegmentEffortService::new(executor, token)))
            }
            ServiceKind::Stream => Self::Stream(Arc::new(StreamService::new(executor, token))),
            ServiceKind::Upload => Self::Upload(Arc::new(UploadService::new(executor, token))),
            ServiceKind::Webhook => Self::Webhook(Arc::new(WebhookService::new(executor, token))),
            ServiceKind::Token => Self::Token(Arc::new(TokenService::new(executor, token))),
        }
    }

    pub fn kind(&self) -> ServiceKind {
        match self {
            Self::Activity(_) => ServiceKind::Activity,
            Self::Athlete(_) => ServiceKind::Athlete,
            Self::Club(_) => ServiceKind::Club,
            Self::Gear(_) => ServiceKind::Gear,
            Self::Segment(_) => ServiceKind::Segment,
            Self::SegmentEffort(_) => ServiceKind::SegmentEffort,
            Self::Stream(_) => ServiceKind::Stream,
            Self::Upload(_) => ServiceKind::Upload,
            Self::Webhook(_) => ServiceKind::Webhook,
            Self::Token(_) => ServiceKind::Token,
        }
    }

    /// Token the handle is bound to.
    pub fn token(&self) -> &Token {
        match self {
            Self::Activity(s) => s.token(),
            Self::Athlete(s) => s.token(),
            Self::Club(s) => s.token(),
            Self::Gear(s) => s.token(),
            Self::Segment(s) => s.token(),
            Self::SegmentEffort(s) => s.token(),
            Self::Stream(s) => s.token(),
            Self::Upload(s) => s.token(),
            Self::Webhook(s) => s.token(),
            Self::Token(s) => s.token(),
        }
    }

    /// True if both handles share the same service instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Activity(a), Self::Activity(b)) => Arc::ptr_eq(a, b),
            (Self::Athlete(a), Self::Athlete(b)) => Arc::ptr_eq(a, b),
            (Self::Club(a), Self::Club(b)) => Arc::ptr_eq(a, b),
            (Self::Gear(a), Self::Gear(b)) => Arc::ptr_eq(a, b),
            (Self::Segment(a), Self::Segment(b)) => Arc::ptr_eq(a, b),
            (Self::SegmentEffort(a), Self::SegmentEffort(b)) => Arc::ptr_eq(a, b),
            (Self::Stream(a), Self::Stream(b)) => Arc::ptr_eq(a, b),
            (Self::Upload(a), Self::Upload(b)) => Arc::ptr_eq(a, b),
            (Self::Webhook(a), Self::Webhook(b)) => Arc::ptr_eq(a, b),
            (Self::Token(a), Self::Token(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServiceHandle").field(&self.kind()).finish()
    }
}

/// Construction slots for one token, keyed by kind.
type KindSlots = DashMap<ServiceKind, Arc<OnceLock<ServiceHandle>>>;

/// Registry of service handles, one per (token, kind).
pub struct ServiceRegistry {
    executor: RequestExecutor,
    handles: DashMap<String, Arc<KindSlots>>,
}

impl ServiceRegistry {
    /// Create a registry whose handles share `executor`.
    pub fn new(executor: RequestExecutor) -> Self {
        Self {
            executor,
            handles: DashMap::new(),
        }
    }

    /// Create a registry talking to Strava over `reqwest`.
    pub fn from_config(config: &Config) -> std::result::Result<Self, TransportError> {
        let transport = ReqwestTransport::from_config(config)?;
        Ok(Self::new(RequestExecutor::new(Arc::new(transport), config.page_limits())))
    }

    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Return the cached handle for (`token`, `kind`), building it with
    /// `factory` on first use.
    ///
    /// `factory` runs at most once per key even under concurrent callers; it
    /// must not call back into the registry for the same key. A factory that
    /// returns a handle of a different kind poisons the slot and every lookup
    /// for that key fails with `ApiError::Usage` until it is removed.
    pub fn get_or_create<F>(
        &self,
        token: &Token,
        kind: ServiceKind,
        factory: F,
    ) -> Result<ServiceHandle>
    where
        F: FnOnce(&Token) -> ServiceHandle,
    {
        let slot = self.slot(token, kind);

        let handle = slot.get_or_init(|| {
            tracing::debug!(service = %kind, "Creating service handle");
            factory(token)
        });

        if handle.kind() != kind {
            return Err(ApiError::Usage(format!(
                "Registry slot for {} holds a {} handle",
                kind,
                handle.kind()
            )));
        }

        Ok(handle.clone())
    }

    /// Evict one handle. Removing a missing entry is a no-op.
    pub fn remove(&self, token: &Token, kind: ServiceKind) {
        let slots = self.handles.get(token.access_token()).map(|s| Arc::clone(&s));
        if let Some(slots) = slots {
            if slots.remove(&kind).is_some() {
                tracing::debug!(service = %kind, "Removed service handle");
            }
        }
    }

    /// Evict every handle bound to `token`, e.g. after a refresh or deauthorization.
    pub fn remove_token(&self, token: &Token) {
        if self.handles.remove(token.access_token()).is_some() {
            tracing::debug!("Removed all service handles for token");
        }
    }

    /// True if a handle for (`token`, `kind`) has been built.
    pub fn contains(&self, token: &Token, kind: ServiceKind) -> bool {
        let Some(slots) = self.handles.get(token.access_token()).map(|s| Arc::clone(&s)) else {
            return false;
        };
        let built = slots.get(&kind).is_some_and(|slot| slot.value().get().is_some());
        built
    }

    /// Number of tokens with at least one slot.
    pub fn token_count(&self) -> usize {
        self.handles.len()
    }

    // Map guards are dropped at the end of each statement, before any
    // construction runs, so slow factories never block other shards.
    fn slot(&self, token: &Token, kind: ServiceKind) -> Arc<OnceLock<ServiceHandle>> {
        let slots = Arc::clone(&self.handles.entry(token.access_token().to_string()).or_default());
        // Bound to a local so the entry guard drops before `slots`
        let slot = Arc::clone(&slots.entry(kind).or_default());
        slot
    }

    fn typed(&self, token: &Token, kind: ServiceKind) -> Result<ServiceHandle> {
        let executor = self.executor.clone();
        self.get_or_create(token, kind, |t| ServiceHandle::new(kind, executor, t.clone()))
    }

    pub fn activities(&self, token: &Token) -> Result<Arc<ActivityService>> {
        match self.typed(token, ServiceKind::Activity)? {
            ServiceHandle::Activity(service) => Ok(service),
            other => Err(mismatch(ServiceKind::Activity, &other)),
        }
    }

    pub fn athletes(&self, token: &Token) -> Result<Arc<AthleteService>> {
        match self.typed(token, ServiceKind::Athlete)? {
            ServiceHandle::Athlete(service) => Ok(service),
            other => Err(mismatch(ServiceKind::Athlete, &other)),
        }
    }

    pub fn clubs(&self, token: &Token) -> Result<Arc<ClubService>> {
        match self.typed(token, ServiceKind::Club)? {
            ServiceHandle::Club(service) => Ok(service),
            other => Err(mismatch(ServiceKind::Club, &other)),
        }
    }

    pub fn gear(&self, token: &Token) -> Result<Arc<GearService>> {
        match self.typed(token, ServiceKind::Gear)? {
            ServiceHandle::Gear(service) => Ok(service),
            other => Err(mismatch(ServiceKind::Gear, &other)),
        }
    }

    pub fn segments(&self, token: &Token) -> Result<Arc<SegmentService>> {
        match self.typed(token, ServiceKind::Segment)? {
            ServiceHandle::Segment(service) => Ok(service),
            other => Err(mismatch(ServiceKind::Segment, &other)),
        }
    }

    pub fn segment_efforts(&self, token: &Token) -> Result<Arc<SegmentEffortService>> {
        match self.typed(token, ServiceKind::SegmentEffort)? {
            ServiceHandle::SegmentEffort(service) => Ok(service),
            other => Err(mismatch(ServiceKind::SegmentEffort, &other)),
        }
    }

    pub fn streams(&self, token: &Token) -> Result<Arc<StreamService>> {
        match self.typed(token, ServiceKind::Stream)? {
            ServiceHandle::Stream(service) => Ok(service),
            other => Err(mismatch(ServiceKind::Stream, &other)),
        }
    }

    pub fn uploads(&self, token: &Token) -> Result<Arc<UploadService>> {
        match self.typed(token, ServiceKind::Upload)? {
            ServiceHandle::Upload(service) => Ok(service),
            other => Err(mismatch(ServiceKind::Upload, &other)),
        }
    }

    pub fn webhooks(&self, token: &Token) -> Result<Arc<WebhookService>> {
        match self.typed(token, ServiceKind::Webhook)? {
            ServiceHandle::Webhook(service) => Ok(service),
            other => Err(mismatch(ServiceKind::Webhook, &other)),
        }
    }

    pub fn tokens(&self, token: &Token) -> Result<Arc<TokenService>> {
        match self.typed(token, ServiceKind::Token)? {
            ServiceHandle::Token(service) => Ok(service),
            other => Err(mismatch(ServiceKind::Token, &other)),
        }
    }
}

fn mismatch(expected: ServiceKind, found: &ServiceHandle) -> ApiError {
    ApiError::Usage(format!(
        "Expected a {} handle, found {}",
        expected,
        found.kind()
    ))
}
