// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava client smoke test.
//!
//! Reads a token from the environment, then prints the authenticated athlete
//! and their most recent page of activities as JSON.

use anyhow::Context;
use strava_client::{config, Config, Paging, ServiceRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env();
    tracing::info!(base_url = %config.base_url, "Starting Strava client");

    let token = config::token_from_env().context("Failed to load access token")?;
    let registry = ServiceRegistry::from_config(&config).context("Failed to build HTTP client")?;

    let athlete = registry
        .athletes(&token)?
        .get_authenticated_athlete()
        .await
        .context("Failed to fetch authenticated athlete")?;
    println!("{}", serde_json::to_string_pretty(&athlete)?);

    let activities = registry
        .activities(&token)?
        .list_authenticated_athlete_activities(None, None, Some(Paging::new(1, 30)))
        .await
        .context("Failed to list activities")?;
    tracing::info!(count = activities.len(), "Fetched activities");
    println!("{}", serde_json::to_string_pretty(&activities)?);

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,strava_client=debug")),
        )
        .with(format)
        .init();
}
