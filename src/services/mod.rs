// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Service handles - one per resource family, bound to a token.

pub mod activity;
pub mod athlete;
pub mod club;
pub mod gear;
pub mod segment;
pub mod segment_effort;
pub mod stream;
pub mod token;
pub mod upload;
pub mod webhook;

pub use activity::ActivityService;
pub use athlete::AthleteService;
pub use club::ClubService;
pub use gear::GearService;
pub use segment::SegmentService;
pub use segment_effort::SegmentEffortService;
pub use stream::StreamService;
pub use token::TokenService;
pub use upload::UploadService;
pub use webhook::WebhookService;

/// Path prefix of the Strava REST API (v3).
pub(crate) const API_PREFIX: &str = "/api/v3";
