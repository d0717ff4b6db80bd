//! Fake Congress.gov and LegiScan servers for integration tests.
//!
//! Binds an `axum` router to 127.0.0.1 on a random port and serves:
//! - `GET /bill` and `GET /search/bill` from configured envelopes
//! - `GET /bill/{congress}/{type}/{number}` from configured detail records
//! - `GET /legiscan/` for `op=getBill`
//!
//! Every request's path and query string is recorded so tests can assert on
//! offsets, limits and credentials.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
}

#[derive(Default)]
struct UpstreamState {
    listing: Value,
    search: Value,
    details: HashMap<String, Value>,
    legiscan: HashMap<String, Value>,
    failure: Option<StatusCode>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<UpstreamState>>;

pub struct FakeUpstream {
    addr: SocketAddr,
    state: Shared,
}

impl FakeUpstream {
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state: Shared = Arc::new(Mutex::new(UpstreamState {
            listing: json!({ "bills": [] }),
            search: json!({ "results": [] }),
            ..UpstreamState::default()
        }));

        let app = Router::new()
            .route("/bill", get(listing))
            .route("/search/bill", get(search))
            .route("/bill/:congress/:bill_type/:number", get(detail))
            .route("/legiscan/", get(legiscan))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake upstream");
        });

        Ok(Self { addr, state })
    }

    pub fn congress_base(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn legiscan_base(&self) -> String {
        format!("http://{}/legiscan/", self.addr)
    }

    pub async fn set_listing(&self, envelope: Value) {
        self.state.lock().await.listing = envelope;
    }

    pub async fn set_search(&self, envelope: Value) {
        self.state.lock().await.search = envelope;
    }

    pub async fn add_detail(&self, congress: u32, bill_type: &str, number: &str, bill: Value) {
        self.state
            .lock()
            .await
            .details
            .insert(format!("{congress}/{bill_type}/{number}"), bill);
    }

    pub async fn add_legiscan(&self, bill_id: u64, envelope: Value) {
        self.state
            .lock()
            .await
            .legiscan
            .insert(bill_id.to_string(), envelope);
    }

    /// Makes every congress route answer with `status`.
    pub async fn fail_with(&self, status: StatusCode) {
        self.state.lock().await.failure = Some(status);
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().await.requests.clone()
    }
}

/// An address nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}

async fn record(state: &Shared, uri: &Uri, query: HashMap<String, String>) -> Option<StatusCode> {
    let mut guard = state.lock().await;
    guard.requests.push(RecordedRequest {
        path: uri.path().to_string(),
        query,
    });
    guard.failure
}

async fn listing(
    State(state): State<Shared>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(status) = record(&state, &uri, query).await {
        return (status, "upstream unavailable").into_response();
    }
    Json(state.lock().await.listing.clone()).into_response()
}

async fn search(
    State(state): State<Shared>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(status) = record(&state, &uri, query).await {
        return (status, "upstream unavailable").into_response();
    }
    Json(state.lock().await.search.clone()).into_response()
}

async fn detail(
    State(state): State<Shared>,
    Path((congress, bill_type, number)): Path<(String, String, String)>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(status) = record(&state, &uri, query).await {
        return (status, "upstream unavailable").into_response();
    }
    let key = format!("{congress}/{bill_type}/{number}");
    match state.lock().await.details.get(&key) {
        Some(bill) => Json(json!({ "bill": bill })).into_response(),
        None => (StatusCode::NOT_FOUND, "no such bill").into_response(),
    }
}

async fn legiscan(
    State(state): State<Shared>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let id = query.get("id").cloned().unwrap_or_default();
    record(&state, &uri, query).await;
    match state.lock().await.legiscan.get(&id) {
        Some(envelope) => Json(envelope.clone()).into_response(),
        None => Json(json!({
            "status": "ERROR",
            "alert": { "message": "Unknown bill id" }
        }))
        .into_response(),
    }
}
