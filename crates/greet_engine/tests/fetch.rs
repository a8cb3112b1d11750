use std::time::Duration;

use greet_engine::{EngineEvent, EngineHandle, FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetcher_extracts_message_from_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/message"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Hello from the server!" })),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/message", server.uri());

    let message = fetcher.fetch_message(&url).await.expect("fetch ok");
    assert_eq!(message, "Hello from the server!");
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/missing", server.uri());

    let err = fetcher.fetch_message(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/message"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/message", server.uri());

    let err = fetcher.fetch_message(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn fetcher_fails_when_message_field_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "greeting": "hi" })))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/message", server.uri());

    let err = fetcher.fetch_message(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn fetcher_fails_when_connection_is_refused() {
    // Grab an address that was live a moment ago, then close it.
    let server = MockServer::start().await;
    let url = format!("{}/message", server.uri());
    drop(server);

    let fetcher = ReqwestFetcher::new(FetchSettings::default());

    let err = fetcher.fetch_message(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn fetcher_rejects_invalid_url() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default());

    let err = fetcher.fetch_message("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn fetcher_times_out_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "message": "slow" })),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let url = format!("{}/slow", server.uri());

    let err = fetcher.fetch_message(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_completion_for_enqueued_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "hi" })))
        .mount(&server)
        .await;

    let (engine, events) = EngineHandle::new(FetchSettings::default());
    engine.fetch(format!("{}/message", server.uri()));

    let event = tokio::task::spawn_blocking(move || events.recv_timeout(Duration::from_secs(5)))
        .await
        .expect("join")
        .expect("engine event");

    assert_eq!(
        event,
        EngineEvent::FetchCompleted {
            result: Ok("hi".to_string()),
        }
    );
}
