//! HTTP client for integration testing.
//!
//! Drives the axum router in-process with `oneshot`, without binding a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sampleapp_core::kernel::ServerDeps;
use sampleapp_core::server::build_app;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

/// Client for issuing requests against the application router in tests.
pub struct HttpClient {
    router: Router,
}

/// Status, headers of interest and body of a response.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl HttpResponse {
    /// Parse the body as JSON, panicking with the raw body if it is not.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({e}): {}", self.body))
    }
}

impl HttpClient {
    pub fn new(deps: ServerDeps) -> Self {
        Self::with_timeout(deps, Duration::from_secs(10))
    }

    pub fn with_timeout(deps: ServerDeps, request_timeout: Duration) -> Self {
        Self {
            router: build_app(deps, request_timeout),
        }
    }

    pub async fn get(&self, uri: &str) -> HttpResponse {
        let request = Request::get(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// POST url-encoded pairs, preserving order and repeated keys.
    pub async fn post_form(&self, uri: &str, fields: &[(String, String)]) -> HttpResponse {
        let body = encode_form(fields);
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("valid request");
        self.send(request).await
    }

    /// POST a raw JSON body, so tests can send malformed payloads too.
    pub async fn post_json(&self, uri: &str, body: &str) -> HttpResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> HttpResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        HttpResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

fn encode_form(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
