mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{FakePublisher, FakeShortener, SHORT_URL, UpstreamErrorKind};
use qrlink::routes::router;
use std::sync::Arc;

#[tokio::test]
async fn test_make_from_blob_url() {
    let server = TestServer::new(router(common::create_default_state())).unwrap();

    let response = server
        .get("/api/make")
        .add_query_param("url", "https://github.com/org/repo/blob/main/audio/a.mp3")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["original"],
        "https://github.com/org/repo/blob/main/audio/a.mp3"
    );
    assert_eq!(
        json["raw"],
        "https://raw.githubusercontent.com/org/repo/main/audio/a.mp3"
    );
    assert_eq!(json["short"], SHORT_URL);
    assert_eq!(
        json["qr"],
        "https://api.qrserver.com/v1/create-qr-code/?size=500x500&data=https%3A%2F%2Fis.gd%2Fabc123"
    );
}

#[tokio::test]
async fn test_make_from_raw_url_shortens_it_unchanged() {
    let shortener = Arc::new(FakeShortener::default());
    let state = common::create_test_state(Arc::new(FakePublisher::default()), shortener.clone());
    let server = TestServer::new(router(state)).unwrap();

    let raw = "https://raw.githubusercontent.com/org/repo/main/audio/a.mp3";
    let response = server.get("/api/make").add_query_param("url", raw).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["raw"], raw);
    assert_eq!(shortener.requested(), vec![raw.to_string()]);
}

#[tokio::test]
async fn test_make_missing_url_parameter() {
    let server = TestServer::new(router(common::create_default_state())).unwrap();

    let response = server.get("/api/make").await;

    response.assert_status_bad_request();
    response.assert_json(&serde_json::json!({ "error": "Missing url parameter" }));
}

#[tokio::test]
async fn test_make_blank_url_parameter() {
    let server = TestServer::new(router(common::create_default_state())).unwrap();

    let response = server.get("/api/make").add_query_param("url", "   ").await;

    response.assert_status_bad_request();
    response.assert_json(&serde_json::json!({ "error": "Missing url parameter" }));
}

#[tokio::test]
async fn test_make_invalid_github_url() {
    let shortener = Arc::new(FakeShortener::default());
    let state = common::create_test_state(Arc::new(FakePublisher::default()), shortener.clone());
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .get("/api/make")
        .add_query_param("url", "https://example.com/not-github")
        .await;

    response.assert_status_bad_request();
    response.assert_json(&serde_json::json!({ "error": "Invalid GitHub URL" }));
    assert!(shortener.requested().is_empty());
}

#[tokio::test]
async fn test_make_shortener_error_is_passed_through() {
    let shortener = Arc::new(FakeShortener::failing(UpstreamErrorKind::Status(
        400,
        "Error: Please enter a valid URL to shorten".to_string(),
    )));
    let state = common::create_test_state(Arc::new(FakePublisher::default()), shortener);
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .get("/api/make")
        .add_query_param("url", "https://github.com/org/repo/blob/main/a.mp3")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("Error: Please enter a valid URL to shorten"));
    assert!(json.get("raw").is_none());
    assert!(json.get("short").is_none());
}

#[tokio::test]
async fn test_make_network_failure() {
    let shortener = Arc::new(FakeShortener::failing(UpstreamErrorKind::Network(
        "error sending request".to_string(),
    )));
    let state = common::create_test_state(Arc::new(FakePublisher::default()), shortener);
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .get("/api/make")
        .add_query_param("url", "https://github.com/org/repo/blob/main/a.mp3")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("error sending request")
    );
}
