// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava API client with per-token service handles.
//!
//! A [`ServiceRegistry`] hands out one service handle per (access token,
//! resource family). Every handle routes its calls through a shared
//! [`RequestExecutor`], which enforces paging bounds and scopes and maps
//! Strava's HTTP responses onto [`ApiError`] and `Option`/`Vec` results.

pub mod config;
pub mod error;
pub mod executor;
pub mod models;
pub mod paging;
pub mod registry;
pub mod services;
pub mod time_utils;
pub mod token;
pub mod transport;

pub use config::Config;
pub use error::{ApiError, ErrorKind, FieldError, Result};
pub use executor::{CallKind, Operation, Outcome, RequestExecutor};
pub use paging::{PageLimits, Paging};
pub use registry::{ServiceHandle, ServiceKind, ServiceRegistry};
pub use token::Token;
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport, TransportError};
