//! A canned-response HTTP server for exercising the Gemini client.
//!
//! Every request, whatever its path, gets the same status and body. Requests
//! are recorded so tests can assert on what was (or was not) sent.

#![allow(clippy::unwrap_used, dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Origin-form (`/v1beta/...`) for direct calls, absolute-form when the
    /// server is used as a proxy.
    pub uri: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Clone)]
struct AppState {
    status: StatusCode,
    body: Arc<str>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    /// Starts a server answering every request with `status` and `body`.
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = AppState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into().into(),
            requests: Arc::clone(&requests),
        };

        let app = Router::new().fallback(record).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    /// Base URL to hand to `Translator::with_base_url`.
    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    /// Address usable as an HTTP proxy URL.
    pub fn proxy_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: String,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        uri: uri.to_string(),
        body,
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json; charset=UTF-8")],
        state.body.to_string(),
    )
}

/// A success body whose first candidate carries `text`.
pub fn candidate_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ], "role": "model" } }
        ]
    })
    .to_string()
}
