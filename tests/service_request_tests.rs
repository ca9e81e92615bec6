// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request descriptors built by the service wrappers.

use chrono::{TimeZone, Utc};
use reqwest::Method;
use strava_client::models::{
    ActivityUpdate, ClientCredentials, NewSubscription, NewUpload, StreamType,
};
use strava_client::transport::RequestBody;
use strava_client::Paging;

mod common;
use common::{read_only_token, registry, write_token, StubTransport};

#[tokio::test]
async fn test_get_activity_request() {
    let transport = StubTransport::fixed(200, r#"{"id":123,"name":"Morning Ride"}"#);
    let registry = registry(transport.clone());

    let activity = registry
        .activities(&read_only_token())
        .unwrap()
        .get_activity(123)
        .await
        .unwrap()
        .expect("activity should be present");
    assert_eq!(activity.name.as_deref(), Some("Morning Ride"));

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/v3/activities/123");
    assert_eq!(request.query_value("include_all_efforts"), Some("true"));
    assert_eq!(request.authorization, "Bearer read-token");
}

#[tokio::test]
async fn test_activity_list_filters_by_date() {
    let transport = StubTransport::fixed(200, "[]");
    let registry = registry(transport.clone());
    let before = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();

    registry
        .activities(&read_only_token())
        .unwrap()
        .list_authenticated_athlete_activities(Some(before), None, Some(Paging::new(1, 10)))
        .await
        .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.path, "/api/v3/athlete/activities");
    assert_eq!(request.query_value("before"), Some(before.timestamp().to_string().as_str()));
    assert_eq!(request.query_value("after"), None);
    assert_eq!(request.query_value("per_page"), Some("10"));
}

#[tokio::test]
async fn test_update_activity_sends_only_set_fields() {
    let transport = StubTransport::fixed(200, r#"{"id":5,"name":"Renamed","commute":true}"#);
    let registry = registry(transport.clone());

    let update = ActivityUpdate {
        name: Some("Renamed".to_string()),
        commute: Some(true),
        ..Default::default()
    };
    let activity = registry
        .activities(&write_token())
        .unwrap()
        .update_activity(5, &update)
        .await
        .unwrap();
    assert_eq!(activity.commute, Some(true));

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::PUT);
    match request.body {
        RequestBody::Json(value) => {
            assert_eq!(value, serde_json::json!({ "name": "Renamed", "commute": true }));
        }
        other => panic!("expected JSON body, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_with_empty_body_succeeds() {
    let transport = StubTransport::fixed(204, "");
    let registry = registry(transport.clone());

    registry
        .activities(&write_token())
        .unwrap()
        .delete_comment(10, 20)
        .await
        .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(request.path, "/api/v3/activities/10/comments/20");
}

#[tokio::test]
async fn test_star_segment_sends_form() {
    let transport = StubTransport::fixed(200, r#"{"id":77,"name":"Old La Honda"}"#);
    let registry = registry(transport.clone());

    let segment = registry
        .segments(&write_token())
        .unwrap()
        .star_segment(77, true)
        .await
        .unwrap();
    assert_eq!(segment.id, 77);

    let request = transport.last_request().unwrap();
    assert_eq!(request.path, "/api/v3/segments/77/starred");
    match request.body {
        RequestBody::Form(fields) => {
            assert_eq!(fields, vec![("starred".to_string(), "true".to_string())]);
        }
        other => panic!("expected form body, got {:?}", other),
    }
}

#[tokio::test]
async fn test_gear_id_is_url_encoded() {
    let transport = StubTransport::fixed(404, "");
    let registry = registry(transport.clone());

    let gear = registry
        .gear(&read_only_token())
        .unwrap()
        .get_gear("b 1/2")
        .await
        .unwrap();
    assert!(gear.is_none());
    assert_eq!(transport.last_request().unwrap().path, "/api/v3/gear/b%201%2F2");
}

#[tokio::test]
async fn test_stream_keys() {
    let transport = StubTransport::fixed(
        200,
        r#"[{"type":"time","data":[0,1,2],"series_type":"distance","original_size":3,"resolution":"high"}]"#,
    );
    let registry = registry(transport.clone());

    let streams = registry
        .streams(&read_only_token())
        .unwrap()
        .get_segment_streams(9, &[StreamType::Time, StreamType::LatLng])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(streams.len(), 1);
    assert_eq!(streams[0].data.len(), 3);

    let request = transport.last_request().unwrap();
    assert_eq!(request.path, "/api/v3/segments/9/streams");
    assert_eq!(request.query_value("keys"), Some("time,latlng"));
    assert_eq!(request.query_value("key_by_type"), Some("false"));
}

#[tokio::test]
async fn test_upload_is_multipart() {
    let transport = StubTransport::fixed(
        201,
        r#"{"id":900,"status":"Your activity is still being processed."}"#,
    );
    let registry = registry(transport.clone());

    let upload = NewUpload {
        data_type: "gpx".to_string(),
        file_name: "ride.gpx".to_string(),
        data: b"<gpx/>".to_vec(),
        name: Some("Evening Ride".to_string()),
        description: None,
        external_id: None,
    };
    let status = registry
        .uploads(&write_token())
        .unwrap()
        .upload(&upload)
        .await
        .unwrap();
    assert!(!status.is_complete());

    match transport.last_request().unwrap().body {
        RequestBody::Multipart { fields, file_name, data } => {
            assert_eq!(file_name, "ride.gpx");
            assert_eq!(data, b"<gpx/>".to_vec());
            assert!(fields.contains(&("data_type".to_string(), "gpx".to_string())));
            assert!(fields.contains(&("name".to_string(), "Evening Ride".to_string())));
            assert!(!fields.iter().any(|(k, _)| k == "description"));
        }
        other => panic!("expected multipart body, got {:?}", other),
    }
}

#[tokio::test]
async fn test_webhook_calls_use_client_credentials_not_scopes() {
    let transport = StubTransport::fixed(
        201,
        r#"{"id":1,"callback_url":"https://example.com/hook"}"#,
    );
    let registry = registry(transport.clone());
    let client = ClientCredentials {
        client_id: "123".to_string(),
        client_secret: "shh".to_string(),
    };

    // Read-only token is fine: Strava authenticates these by client secret
    let webhooks = registry.webhooks(&read_only_token()).unwrap();
    let subscription = webhooks
        .create_subscription(
            &client,
            &NewSubscription {
                callback_url: "https://example.com/hook".to_string(),
                verify_token: "verify".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(subscription.id, 1);

    webhooks.delete_subscription(&client, 1).await.unwrap();
    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(request.query_value("client_secret"), Some("shh"));
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn test_deauthorise_then_cached_handle_is_unauthorized() {
    let transport = StubTransport::new(|request| {
        if request.path == "/oauth/deauthorize" {
            Ok(strava_client::ApiResponse::new(200, r#"{"access_token":"read-token"}"#))
        } else {
            Ok(strava_client::ApiResponse::new(
                401,
                r#"{"message":"Authorization Error","errors":[]}"#,
            ))
        }
    });
    let registry = registry(transport.clone());
    let token = read_only_token();

    let athletes = registry.athletes(&token).unwrap();
    let response = registry.tokens(&token).unwrap().deauthorise().await.unwrap();
    assert_eq!(response.access_token, "read-token");

    let err = athletes.get_authenticated_athlete().await.unwrap_err();
    assert!(err.is_unauthorized());
}
