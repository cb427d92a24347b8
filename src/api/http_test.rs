use super::*;
use axum::Json;
use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::routing::get;
use serde_json::{Value, json};

/// Serve a stub backend on an ephemeral port and return its origin.
async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/echo", get(|uri: Uri| async move { Json(json!({ "query": uri.query() })) }))
        .route("/api/missing", get(|| async { (StatusCode::NOT_FOUND, "Resource does not exist") }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

// =============================================================================
// with_query / encode_segment
// =============================================================================

#[test]
fn with_query_without_params_returns_path() {
    assert_eq!(with_query("/api/events", &[]), "/api/events");
}

#[test]
fn with_query_encodes_space_as_percent_20() {
    assert_eq!(with_query("/api/users", &[("filter", "a b")]), "/api/users?filter=a%20b");
}

#[test]
fn with_query_encodes_reserved_characters() {
    assert_eq!(with_query("/api/users", &[("filter", "a&b=c/d")]), "/api/users?filter=a%26b%3Dc%2Fd");
    assert_eq!(with_query("/api/users", &[("filter", "x-y_z.~")]), "/api/users?filter=x-y_z.~");
}

#[test]
fn with_query_joins_multiple_params() {
    assert_eq!(with_query("/p", &[("a", "1"), ("b", "two words")]), "/p?a=1&b=two%20words");
}

#[test]
fn encode_segment_escapes_slashes() {
    assert_eq!(encode_segment("Study Hours/Week"), "Study%20Hours%2FWeek");
}

// =============================================================================
// ReqwestTransport
// =============================================================================

#[test]
fn new_rejects_relative_base_url() {
    let config = ClientConfig::new("not a url").unwrap();
    let err = ReqwestTransport::new(&config).err().unwrap();
    assert_eq!(err.error_code(), "E_INVALID_BASE_URL");
}

#[tokio::test]
async fn get_returns_status_and_body() {
    let origin = spawn_backend().await;
    let transport = ReqwestTransport::new(&ClientConfig::new(&origin).unwrap()).unwrap();

    let resp = transport.get("/api/echo?filter=a%20b").await.unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.url, format!("{origin}/api/echo?filter=a%20b"));
    let body: Value = serde_json::from_str(&resp.body).unwrap();
    assert_eq!(body["query"], "filter=a%20b");
}

#[tokio::test]
async fn get_passes_non_success_through() {
    let origin = spawn_backend().await;
    let transport = ReqwestTransport::new(&ClientConfig::new(&origin).unwrap()).unwrap();

    let resp = transport.get("/api/missing").await.unwrap();
    assert_eq!(resp.status, 404);
    assert!(!resp.is_success());
    assert_eq!(resp.body, "Resource does not exist");
}

#[tokio::test]
async fn get_reports_connection_failure() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let transport = ReqwestTransport::new(&ClientConfig::new(&format!("http://{addr}")).unwrap()).unwrap();

    let err = transport.get("/api/events").await.unwrap_err();
    assert!(matches!(err, ApiError::Request { ref url, .. } if url.ends_with("/api/events")));
}
