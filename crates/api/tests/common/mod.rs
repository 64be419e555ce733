#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use futures::stream::{self, BoxStream, StreamExt};
use http_body_util::BodyExt;
use tokio::sync::Notify;
use tower::ServiceExt;

use atlas_api::config::ServerConfig;
use atlas_api::router::build_app_router;
use atlas_api::state::AppState;
use atlas_db::{Database, DbError, Record, SqlParam, SqlValue};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        db_max_connections: 5,
    }
}

/// Build the full application router (same middleware stack as production)
/// on top of the given database.
pub fn build_test_app(db: Arc<dyn Database>) -> Router {
    build_test_app_with_config(db, test_config())
}

pub fn build_test_app_with_config(db: Arc<dyn Database>, config: ServerConfig) -> Router {
    let state = AppState {
        db,
        config: Arc::new(config),
    };
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Stub database
// ---------------------------------------------------------------------------

/// Which capability a recorded call went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Execute,
    QueryRow,
    QueryRows,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub capability: Capability,
    pub statement: String,
    pub params: Vec<SqlParam>,
}

/// In-memory [`Database`] with canned answers that records every call.
///
/// Failures are reported as `sqlx::Error::Protocol` carrying `failure`,
/// standing in for a lost connection.
#[derive(Default)]
pub struct StubDatabase {
    affected: u64,
    row: Option<Record>,
    rows: Vec<Record>,
    /// Fail the multi-row cursor after yielding this many rows.
    fail_rows_after: Option<usize>,
    failure: Option<String>,
    /// Single-row queries never complete.
    hang: bool,
    /// Signalled when a hanging query starts waiting.
    entered: Arc<Notify>,
    /// Set when a hanging query's future is dropped.
    cancelled: Arc<AtomicBool>,
    calls: Mutex<Vec<Call>>,
}

/// Flips its flag when dropped, i.e. when the owning future is cancelled.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl StubDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_affected(mut self, affected: u64) -> Self {
        self.affected = affected;
        self
    }

    pub fn with_row(mut self, values: Vec<SqlValue>) -> Self {
        self.row = Some(Record::new(values));
        self
    }

    pub fn with_rows(mut self, rows: Vec<Vec<SqlValue>>) -> Self {
        self.rows = rows.into_iter().map(Record::new).collect();
        self
    }

    /// Every call fails before touching any row.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// The cursor yields `count` rows, then an error.
    pub fn failing_mid_scan(mut self, count: usize, message: &str) -> Self {
        self.fail_rows_after = Some(count);
        self.failure = Some(message.to_string());
        self
    }

    /// `query_row` waits forever, standing in for a query stuck on a lock.
    pub fn hanging(mut self) -> Self {
        self.hang = true;
        self
    }

    /// Resolves once a hanging query is in flight.
    pub async fn wait_until_entered(&self) {
        self.entered.notified().await;
    }

    /// Whether a hanging query was dropped before completing.
    pub fn was_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, capability: Capability, statement: &str, params: &[SqlParam]) {
        self.calls.lock().unwrap().push(Call {
            capability,
            statement: statement.to_string(),
            params: params.to_vec(),
        });
    }

    fn error(&self) -> DbError {
        let message = self.failure.clone().unwrap_or_default();
        DbError::Sqlx(sqlx::Error::Protocol(message))
    }

    fn fails_upfront(&self) -> bool {
        self.failure.is_some() && self.fail_rows_after.is_none()
    }
}

#[async_trait]
impl Database for StubDatabase {
    async fn execute(&self, statement: &str, params: &[SqlParam]) -> Result<u64, DbError> {
        self.record(Capability::Execute, statement, params);
        if self.fails_upfront() {
            return Err(self.error());
        }
        Ok(self.affected)
    }

    async fn query_row(
        &self,
        statement: &str,
        params: &[SqlParam],
    ) -> Result<Option<Record>, DbError> {
        self.record(Capability::QueryRow, statement, params);
        if self.hang {
            let _flag = DropFlag(Arc::clone(&self.cancelled));
            self.entered.notify_one();
            std::future::pending::<()>().await;
        }
        if self.fails_upfront() {
            return Err(self.error());
        }
        Ok(self.row.clone())
    }

    fn query_rows<'a>(
        &'a self,
        statement: &'a str,
        params: &'a [SqlParam],
    ) -> BoxStream<'a, Result<Record, DbError>> {
        self.record(Capability::QueryRows, statement, params);
        if self.fails_upfront() {
            return stream::iter(vec![Err(self.error())]).boxed();
        }

        let mut items: Vec<Result<Record, DbError>> = self.rows.iter().cloned().map(Ok).collect();
        if let Some(count) = self.fail_rows_after {
            items.truncate(count);
            items.push(Err(self.error()));
        }
        stream::iter(items).boxed()
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body)),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body.to_string())).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response status and return its JSON body.
pub async fn expect_json(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
