// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conversions between Strava's epoch-second timestamps and `chrono`.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Convert epoch seconds (as in `expires_at`) to a UTC timestamp.
///
/// Out-of-range values map to the Unix epoch, i.e. an already-expired token.
pub fn from_epoch_secs(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_round_trip_format() {
        assert_eq!(format_utc_rfc3339(from_epoch_secs(1_700_000_000)), "2023-11-14T22:13:20Z");
        assert_eq!(from_epoch_secs(i64::MAX).timestamp(), 0);
    }
}
