// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error taxonomy shared by every Strava API operation.

use serde::Deserialize;
use std::fmt;

/// Caller-visible failure of a Strava API operation.
///
/// Read operations never use `NotFound`: a missing resource on a read is
/// reported as an absent value instead.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Caller supplied invalid parameters; no request was sent.
    #[error("Invalid usage: {0}")]
    Usage(String),

    /// Missing scope (detected locally) or HTTP 401 from Strava.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Mutating operation targeted a resource that does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Strava rejected the request with field-level validation errors.
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        errors: Vec<FieldError>,
    },

    /// Connectivity failure (`status` is `None`) or an unclassified status.
    #[error("Strava API error: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },
}

/// Discriminant of [`ApiError`], for callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Usage,
    Unauthorized,
    NotFound,
    BadRequest,
    Transport,
}

impl ApiError {
    /// Status code Strava uses for rate limiting.
    pub const RATE_LIMIT_STATUS: u16 = 429;

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Usage(_) => ErrorKind::Usage,
            ApiError::Unauthorized(_) => ErrorKind::Unauthorized,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::BadRequest { .. } => ErrorKind::BadRequest,
            ApiError::Transport { .. } => ErrorKind::Transport,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// True when Strava answered 429; callers may back off and retry.
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            ApiError::Transport {
                status: Some(Self::RATE_LIMIT_STATUS),
                ..
            }
        )
    }

    /// HTTP status attached to the failure, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { status, .. } => *status,
            ApiError::BadRequest { .. } => Some(400),
            _ => None,
        }
    }

    pub(crate) fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        ApiError::Transport {
            status,
            message: message.into(),
        }
    }
}

/// Field-level validation detail from a Strava error body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub code: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.resource, self.field, self.code)
    }
}

/// Structured error body returned by Strava on 4xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// Result type alias for Strava API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
