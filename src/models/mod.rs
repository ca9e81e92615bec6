// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data records exchanged with the Strava API.

pub mod activity;
pub mod athlete;
pub mod club;
pub mod gear;
pub mod segment;
pub mod stream;
pub mod token;
pub mod upload;
pub mod webhook;

pub use activity::{
    Activity, ActivityMap, ActivityUpdate, ActivityZone, Comment, Lap, NewActivity, Photo,
};
pub use athlete::{Athlete, AthleteStats, AthleteSummary, AthleteUpdate};
pub use club::{Club, ClubMembershipResponse};
pub use gear::Gear;
pub use segment::{Segment, SegmentEffort};
pub use stream::{Stream, StreamType};
pub use token::{AuthorisationScope, DeauthorisationResponse, TokenRefreshResponse, TokenResponse};
pub use upload::{NewUpload, UploadStatus};
pub use webhook::{ClientCredentials, NewSubscription, Subscription};
