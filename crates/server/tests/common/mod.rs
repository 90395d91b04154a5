//! Shared helpers for router-level tests.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use facegate::{DetectMode, FaceService, VendorError};
use http_body_util::BodyExt;
use serde_json::Value;
use server::{build_router, ServerConfig, ServerState};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Detect(DetectMode, String),
    Verify(String, String),
}

/// Face service double: replays queued results, records calls in order.
#[derive(Default)]
pub struct MockFaces {
    detect: Mutex<VecDeque<Result<Value, VendorError>>>,
    verify: Mutex<VecDeque<Result<Value, VendorError>>>,
    calls: Mutex<Vec<Call>>,
    delay: Option<Duration>,
}

impl MockFaces {
    pub fn detect_returns(self, result: Result<Value, VendorError>) -> Self {
        self.detect.lock().unwrap().push_back(result);
        self
    }

    pub fn verify_returns(self, result: Result<Value, VendorError>) -> Self {
        self.verify.lock().unwrap().push_back(result);
        self
    }

    /// Sleep this long inside every detect call.
    pub fn slow_detect(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FaceService for MockFaces {
    async fn detect(&self, mode: DetectMode, image_url: &str) -> Result<Value, VendorError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Detect(mode, image_url.to_string()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.detect
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(VendorError::Transport("no detect result queued".into())))
    }

    async fn verify(&self, face_id1: &str, face_id2: &str) -> Result<Value, VendorError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Verify(face_id1.to_string(), face_id2.to_string()));
        self.verify
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(VendorError::Transport("no verify result queued".into())))
    }
}

pub fn app(mock: Arc<MockFaces>) -> Router {
    app_with(ServerConfig::default(), mock)
}

pub fn app_with(config: ServerConfig, mock: Arc<MockFaces>) -> Router {
    let state = ServerState::with_service(config, mock);
    build_router(Arc::new(state))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_form(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
