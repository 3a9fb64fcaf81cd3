mod common;

use common::*;
use serde_json::{Value, json};
use share_post::api::handler::{banner, route_request};
use share_post::core::config::AppConfig;

fn config() -> AppConfig {
    AppConfig::new(SITE_URL, None, "bot-token".to_string()).unwrap()
}

fn share_event(headers: Value, body: Option<String>) -> Value {
    proxy_event("POST", "/api/v1/share", headers, body)
}

#[tokio::test]
async fn info_route_returns_version_banner() {
    let api = FakeContentApi::default();
    let event = proxy_event("GET", "/", json!({}), None);
    let response = route_request(&config(), &api, &event).await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(response["body"], banner());
    assert!(banner().starts_with("Installed SharePost v"));
}

#[tokio::test]
async fn share_route_runs_the_dialog_handler() {
    let api = FakeContentApi::with_single_post();
    let body = submission_body(json!({ "to_channel": DEST_CHANNEL, "share_type": "share" }));

    let response = route_request(
        &config(),
        &api,
        &share_event(json!({ "mattermost-user-id": USER_ID }), Some(body)),
    )
    .await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(api.created().len(), 1);
}

#[tokio::test]
async fn share_route_under_plugin_prefix_is_resolved() {
    let api = FakeContentApi::with_single_post();
    let body = submission_body(json!({ "to_channel": DEST_CHANNEL, "share_type": "share" }));
    let event = proxy_event(
        "POST",
        "/plugins/com.example.share-post/api/v1/share",
        json!({ "Mattermost-User-Id": USER_ID }),
        Some(body),
    );

    let response = route_request(&config(), &api, &event).await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(api.created().len(), 1);
}

#[tokio::test]
async fn missing_identity_header_is_rejected_before_parsing() {
    let api = FakeContentApi::with_single_post();

    // The body is not even JSON: a 401 shows the body was never looked at.
    let event = share_event(json!({}), Some("garbage".into()));
    let response = route_request(&config(), &api, &event).await;
    assert_eq!(response["statusCode"], 401);

    let response = route_request(
        &config(),
        &api,
        &share_event(json!({ "Mattermost-User-Id": "" }), Some("garbage".into())),
    )
    .await;
    assert_eq!(response["statusCode"], 401);
    assert!(api.created().is_empty());
}

#[tokio::test]
async fn mismatched_identity_is_rejected() {
    let api = FakeContentApi::with_single_post();
    let body = submission_body(json!({ "to_channel": DEST_CHANNEL, "share_type": "share" }));

    let response = route_request(
        &config(),
        &api,
        &share_event(json!({ "Mattermost-User-Id": "someone-else" }), Some(body)),
    )
    .await;

    assert_eq!(response["statusCode"], 401);
    assert!(api.created().is_empty());
    assert!(api.ephemerals().is_empty());
}

#[tokio::test]
async fn missing_or_malformed_body_is_a_bad_request() {
    let api = FakeContentApi::with_single_post();
    let headers = json!({ "Mattermost-User-Id": USER_ID });

    let response = route_request(&config(), &api, &share_event(headers.clone(), None)).await;
    assert_eq!(response["statusCode"], 400);

    let response =
        route_request(&config(), &api, &share_event(headers, Some("{not json".into()))).await;
    assert_eq!(response["statusCode"], 400);
}

#[tokio::test]
async fn base64_encoded_body_is_decoded() {
    use base64::Engine as _;

    let api = FakeContentApi::with_single_post();
    let body = submission_body(json!({ "to_channel": DEST_CHANNEL, "share_type": "share" }));
    let mut event = share_event(
        json!({ "Mattermost-User-Id": USER_ID }),
        Some(base64::engine::general_purpose::STANDARD.encode(body)),
    );
    event["isBase64Encoded"] = json!(true);

    let response = route_request(&config(), &api, &event).await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(api.created().len(), 1);
}

#[tokio::test]
async fn move_route_is_not_enabled() {
    let api = FakeContentApi::with_single_post();
    let body = submission_body(json!({ "to_channel": DEST_CHANNEL, "share_type": "move" }));
    let event = proxy_event(
        "POST",
        "/api/v1/move",
        json!({ "Mattermost-User-Id": USER_ID }),
        Some(body),
    );

    let response = route_request(&config(), &api, &event).await;

    assert_eq!(response["statusCode"], 404);
    assert!(api.created().is_empty());
    assert!(api.deleted().is_empty());
}

#[tokio::test]
async fn unknown_paths_and_methods() {
    let api = FakeContentApi::default();

    let event = proxy_event("GET", "/api/v1/share", json!({}), None);
    let response = route_request(&config(), &api, &event).await;
    assert_eq!(response["statusCode"], 405);

    let event = proxy_event("GET", "/nope", json!({}), None);
    let response = route_request(&config(), &api, &event).await;
    assert_eq!(response["statusCode"], 404);
}

#[tokio::test]
async fn v1_payload_format_is_supported() {
    let api = FakeContentApi::default();
    let event = json!({ "path": "/", "httpMethod": "GET", "headers": {} });

    let response = route_request(&config(), &api, &event).await;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(response["body"], banner());
}
