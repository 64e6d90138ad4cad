//! Wire-level tests against a throwaway in-process HTTP backend. No external network.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tikloader::extractor::{BackendClient, DownloadResult, SourceResolver, VideoSource};
use tikloader::utils::FetchError;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const TIKTOK_URL: &str = "https://www.tiktok.com/@someone/video/7312345678901234567";

/// Request as seen by the fake backend
struct CapturedRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
}

/// Serve `route` with `status` and `body`. The first request received is sent on the channel.
async fn spawn_backend(
    route: &str,
    status: StatusCode,
    body: impl Into<String>,
) -> (String, oneshot::Receiver<CapturedRequest>) {
    let body = body.into();
    let (capture_tx, capture_rx) = oneshot::channel();
    let capture_tx = Arc::new(Mutex::new(Some(capture_tx)));

    let app = Router::new().route(
        route,
        post(
            move |method: Method, uri: Uri, headers: HeaderMap, payload: String| {
                let capture_tx = Arc::clone(&capture_tx);
                let body = body.clone();
                async move {
                    let sender = capture_tx.lock().unwrap().take();
                    if let Some(sender) = sender {
                        let _ = sender.send(CapturedRequest {
                            method,
                            uri,
                            headers,
                            body: payload,
                        });
                    }
                    (status, body)
                }
            },
        ),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    (format!("http://{}", addr), capture_rx)
}

/// Client that ignores proxy env vars so loopback requests stay local
fn local_client(base_url: &str, endpoint: &str, timeout: Duration) -> BackendClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .expect("client");
    BackendClient::with_client(http, base_url, endpoint)
}

fn client_for(base_url: &str, endpoint: &str) -> BackendClient {
    local_client(base_url, endpoint, Duration::from_secs(10))
}

#[tokio::test]
async fn posts_url_as_json_and_parses_sources() {
    let (base, captured) = spawn_backend(
        "/api/download",
        StatusCode::OK,
        r#"{"data":{"sources":[{"index":0,"url":"https://cdn/a?br=1200"},{"index":1,"url":"https://cdn/b"}]}}"#,
    )
    .await;

    let client = client_for(&base, "api/download");
    let result = client.fetch_sources(TIKTOK_URL).await.expect("fetch");

    let request = captured.await.expect("request captured");
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.uri.path(), "/api/download");
    assert_eq!(
        request.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/json; charset=utf-8")
    );
    let sent: Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(sent, json!({ "url": TIKTOK_URL }));

    assert_eq!(
        result,
        DownloadResult::new(vec![
            VideoSource::new(0, "https://cdn/a?br=1200"),
            VideoSource::new(1, "https://cdn/b"),
        ])
    );
    assert_eq!(result.sources[0].quality_label(), "1 kbps");
}

#[tokio::test]
async fn server_error_maps_to_http_error() {
    let (base, captured) = spawn_backend("/download", StatusCode::INTERNAL_SERVER_ERROR, "boom")
        .await;
    let err = client_for(&base, "download")
        .fetch_sources(TIKTOK_URL)
        .await
        .unwrap_err();
    captured.await.expect("request captured");
    assert!(matches!(err, FetchError::Http(500)), "got {:?}", err);
}

#[tokio::test]
async fn not_found_maps_to_http_error() {
    let (base, captured) = spawn_backend(
        "/download",
        StatusCode::NOT_FOUND,
        r#"{"data":{"sources":[]}}"#,
    )
    .await;
    let err = client_for(&base, "download")
        .fetch_sources(TIKTOK_URL)
        .await
        .unwrap_err();
    captured.await.expect("request captured");
    assert!(matches!(err, FetchError::Http(404)));
}

#[tokio::test]
async fn html_with_ok_status_is_malformed() {
    let (base, captured) = spawn_backend(
        "/download",
        StatusCode::OK,
        "<!DOCTYPE html><html><head><title>Bad Gateway</title></head></html>",
    )
    .await;
    let err = client_for(&base, "download")
        .fetch_sources(TIKTOK_URL)
        .await
        .unwrap_err();
    captured.await.expect("request captured");
    assert!(matches!(err, FetchError::MalformedResponse(_)), "got {:?}", err);
}

#[tokio::test]
async fn empty_object_is_empty_success() {
    let (base, captured) = spawn_backend("/download", StatusCode::OK, "{}").await;
    let result = client_for(&base, "download")
        .fetch_sources(TIKTOK_URL)
        .await
        .expect("fetch");
    captured.await.expect("request captured");
    assert!(result.is_empty());
}

#[tokio::test]
async fn empty_url_entries_are_dropped() {
    let (base, captured) = spawn_backend(
        "/download",
        StatusCode::OK,
        r#"{"data":{"sources":[{"index":0,"url":""},{"index":1,"url":"https://v2"}]}}"#,
    )
    .await;
    let result = client_for(&base, "download")
        .fetch_sources(TIKTOK_URL)
        .await
        .expect("fetch");
    captured.await.expect("request captured");
    assert_eq!(result.sources, vec![VideoSource::new(1, "https://v2")]);
}

#[tokio::test]
async fn trailing_and_leading_slashes_collapse() {
    let (base, captured) = spawn_backend("/resolve", StatusCode::OK, "{}").await;
    client_for(&format!("{}/", base), "/resolve")
        .fetch_sources(TIKTOK_URL)
        .await
        .expect("fetch");
    let request = captured.await.expect("request captured");
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.uri.path(), "/resolve");
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    // Grab a free port, then close it so nothing is listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{}", addr), "download")
        .fetch_sources(TIKTOK_URL)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn configured_timeout_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        // Hold the connection open without answering
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(socket);
    });

    let client = local_client(&format!("http://{}", addr), "download", Duration::from_secs(1));
    let err = client.fetch_sources(TIKTOK_URL).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {:?}", err);
    server.abort();
}

#[tokio::test]
async fn parser_round_trips_a_serialized_result() {
    let original = DownloadResult::new(vec![VideoSource::new(0, "A"), VideoSource::new(1, "B")]);
    let body = json!({ "data": original }).to_string();

    let (base, captured) = spawn_backend("/download", StatusCode::OK, body).await;
    let parsed = client_for(&base, "download")
        .fetch_sources(TIKTOK_URL)
        .await
        .expect("fetch");
    captured.await.expect("request captured");
    assert_eq!(parsed, original);
}
