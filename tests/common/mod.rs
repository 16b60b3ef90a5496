//! Shared test fixtures for the dashboard SDK integration tests.
//!
//! Provides `start_server()`, a local axum server that stands in for the
//! dashboard API. By default every `/dashboard/{name}` route echoes the
//! request back as a one-row array; canned responses can be registered per
//! endpoint name.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::any;
use axum::Router;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{mpsc, Arc};

/// Canned response for one endpoint: status code and raw body.
#[derive(Clone)]
pub struct Canned {
    pub status: u16,
    pub body: String,
}

impl Canned {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

type Responses = Arc<HashMap<String, Canned>>;

/// Start an echo-only fixture server and return its base URL.
pub fn start_server() -> String {
    start_server_with(HashMap::new())
}

/// Start a fixture server answering the named endpoints with canned
/// responses (all others echo). Returns the base URL.
///
/// The server runs on its own thread and runtime for the rest of the test
/// process, so it can be used from both blocking and async tests.
pub fn start_server_with(responses: HashMap<&str, Canned>) -> String {
    let responses: Responses = Arc::new(
        responses
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    );
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let app = Router::new()
                .route("/dashboard/{name}", any(handle))
                .with_state(responses);
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    let addr = rx.recv().unwrap();
    format!("http://{addr}")
}

async fn handle(
    State(responses): State<Responses>,
    method: Method,
    Path(name): Path<String>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let (status, body) = match responses.get(&name) {
        Some(canned) => (
            StatusCode::from_u16(canned.status).unwrap(),
            canned.body.clone(),
        ),
        None => {
            let parsed: Value = if body.is_empty() {
                Value::Null
            } else {
                serde_json::from_str(&body).unwrap_or(Value::String(body))
            };
            let api_key = headers
                .get("x-api-key")
                .and_then(|v| v.to_str().ok())
                .map(|s| Value::String(s.to_string()))
                .unwrap_or(Value::Null);
            let echo = json!([{
                "endpoint": name,
                "method": method.as_str(),
                "body": parsed,
                "api_key": api_key,
            }]);
            (StatusCode::OK, echo.to_string())
        }
    };
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

// ---------------------------------------------------------------------------
// Sample rows
// ---------------------------------------------------------------------------

pub fn top_items_rows() -> Value {
    json!([
        {"item": "X-Burger", "times_added": "42", "revenue_generated": "1260.50"},
        {"item": "Pizza Calabresa", "times_added": 17, "revenue_generated": 935},
        {"item": "Suco de Laranja", "times_added": null, "revenue_generated": "n/a"}
    ])
}

pub fn cash_flow_rows() -> Value {
    json!([
        {"day": "2024-01-01", "total_sales": "100.5", "total_value_paid": "90", "average_ticket": 25.125},
        {"day": "2024-01-02T00:00:00.000Z", "total_sales": 80, "total_value_paid": null},
        {"day": "not a date", "total_sales": "abc"}
    ])
}
