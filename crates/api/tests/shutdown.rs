//! Request timeout and bounded shutdown against a database that never answers.

mod common;

use std::time::{Duration, Instant};

use atlas_api::config::ServerConfig;
use atlas_api::server::{serve, ShutdownOutcome};
use axum::http::StatusCode;
use common::{build_test_app, build_test_app_with_config, get, test_config, StubDatabase};
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

// ---------------------------------------------------------------------------
// Request timeout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn slow_query_times_out_with_408_and_is_cancelled() {
    let db = StubDatabase::new().hanging().into_arc();
    let config = ServerConfig {
        request_timeout_secs: 1,
        ..test_config()
    };
    let app = build_test_app_with_config(db.clone(), config);

    let started = Instant::now();
    let response = get(app, "/api/v1/continent/1").await;

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(db.was_cancelled(), "query future should be dropped on timeout");
}

// ---------------------------------------------------------------------------
// Graceful shutdown
// ---------------------------------------------------------------------------

async fn local_listener() -> TcpListener {
    TcpListener::bind("127.0.0.1:0").await.unwrap()
}

#[tokio::test]
async fn idle_server_drains_immediately() {
    let listener = local_listener().await;
    let app = build_test_app(StubDatabase::new().into_arc());
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(serve(listener, app, Duration::from_secs(5), async move {
        let _ = stop_rx.await;
    }));

    stop_tx.send(()).unwrap();

    let outcome = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server should stop well inside the grace period")
        .unwrap()
        .unwrap();
    assert_eq!(outcome, ShutdownOutcome::Drained);
}

#[tokio::test]
async fn stuck_request_does_not_outlive_grace_period() {
    let listener = local_listener().await;
    let addr = listener.local_addr().unwrap();
    let db = StubDatabase::new().hanging().into_arc();
    // Request timeout (30 s) is far longer than the grace period.
    let app = build_test_app(db.clone());
    let grace = Duration::from_millis(300);
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(serve(listener, app, grace, async move {
        let _ = stop_rx.await;
    }));

    let mut client = TcpStream::connect(addr).await.unwrap();
    client
        .write_all(b"GET /api/v1/continent/1 HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await
        .unwrap();
    tokio::time::timeout(Duration::from_secs(5), db.wait_until_entered())
        .await
        .expect("request should reach the database");

    let started = Instant::now();
    stop_tx.send(()).unwrap();

    let outcome = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("serve should return once the grace period expires")
        .unwrap()
        .unwrap();

    assert_eq!(outcome, ShutdownOutcome::Forced);
    assert!(started.elapsed() >= grace);
    assert!(started.elapsed() < Duration::from_secs(5));
}
