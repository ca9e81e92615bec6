// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Paging behaviour of list operations against a five-item provider.

use strava_client::error::ErrorKind;
use strava_client::Paging;

mod common;
use common::{paged_activities, read_only_token, registry};

fn ids(activities: &[strava_client::models::Activity]) -> Vec<u64> {
    activities.iter().map(|a| a.id).collect()
}

#[tokio::test]
async fn test_pages_of_two_over_five_items() {
    let transport = paged_activities(5);
    let registry = registry(transport.clone());
    let activities = registry.activities(&read_only_token()).unwrap();

    let mut pages = Vec::new();
    for page in 1..=4 {
        let items = activities
            .list_authenticated_athlete_activities(None, None, Some(Paging::new(page, 2)))
            .await
            .expect("page within or beyond range should succeed");
        pages.push(ids(&items));
    }

    assert_eq!(pages, vec![vec![1, 2], vec![3, 4], vec![5], vec![]]);
    assert_eq!(transport.calls(), 4);
}

#[tokio::test]
async fn test_page_far_beyond_end_is_empty() {
    let transport = paged_activities(5);
    let registry = registry(transport);
    let activities = registry.activities(&read_only_token()).unwrap();

    let items = activities
        .list_authenticated_athlete_activities(None, None, Some(Paging::new(1000, 2)))
        .await
        .unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_non_positive_paging_fails_before_transport() {
    let transport = paged_activities(5);
    let registry = registry(transport.clone());
    let activities = registry.activities(&read_only_token()).unwrap();

    for paging in [
        Paging::new(-1, 2),
        Paging::new(0, 2),
        Paging::new(1, -1),
        Paging::new(1, 0),
        Paging::page(-5),
        Paging::page_size(0),
    ] {
        let err = activities
            .list_authenticated_athlete_activities(None, None, Some(paging))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage, "paging {:?}", paging);
    }

    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_oversized_page_is_clamped() {
    let transport = paged_activities(250);
    let registry = registry(transport.clone());
    let activities = registry.activities(&read_only_token()).unwrap();

    let items = activities
        .list_authenticated_athlete_activities(None, None, Some(Paging::new(2, 201)))
        .await
        .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.query_value("per_page"), Some("200"));
    assert_eq!(request.query_value("page"), Some("2"));
    assert_eq!(ids(&items), (201..=250).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_no_paging_fetches_all_pages_in_order() {
    let transport = paged_activities(65);
    let registry = registry(transport.clone());
    let activities = registry.activities(&read_only_token()).unwrap();

    let items = activities
        .list_authenticated_athlete_activities(None, None, None)
        .await
        .unwrap();

    assert_eq!(ids(&items), (1..=65).collect::<Vec<_>>());

    // 30 + 30 + 5: stops at the first short page
    let pages: Vec<_> = transport
        .requests()
        .iter()
        .map(|r| r.query_value("page").unwrap().to_string())
        .collect();
    assert_eq!(pages, vec!["1", "2", "3"]);
    assert!(transport
        .requests()
        .iter()
        .all(|r| r.query_value("per_page") == Some("30")));
}

#[tokio::test]
async fn test_no_paging_on_exact_multiple_reads_trailing_empty_page() {
    let transport = paged_activities(60);
    let registry = registry(transport.clone());
    let activities = registry.activities(&read_only_token()).unwrap();

    let items = activities
        .list_authenticated_athlete_activities(None, None, None)
        .await
        .unwrap();

    assert_eq!(items.len(), 60);
    assert_eq!(transport.calls(), 3);
}

#[tokio::test]
async fn test_single_default_page_is_not_all_pages() {
    let transport = paged_activities(65);
    let registry = registry(transport.clone());
    let activities = registry.activities(&read_only_token()).unwrap();

    let items = activities
        .list_authenticated_athlete_activities(None, None, Some(Paging::page(1)))
        .await
        .unwrap();

    assert_eq!(items.len(), 30);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_all_pages_stops_at_page_limit() {
    use std::sync::Arc;
    use strava_client::{ApiResponse, PageLimits, RequestExecutor, ServiceRegistry};

    // Provider that ignores `page` and always returns a full page
    let transport = common::StubTransport::new(|_| {
        Ok(ApiResponse::new(200, r#"[{"id":1},{"id":2}]"#))
    });
    let limits = PageLimits::new(2, 200).with_max_pages(5);
    let registry = ServiceRegistry::new(RequestExecutor::new(transport.clone(), limits));

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        registry
            .activities(&read_only_token())
            .unwrap()
            .list_friends_activities(None),
    )
    .await
    .expect("listing must terminate");

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(transport.calls(), 5);
}
