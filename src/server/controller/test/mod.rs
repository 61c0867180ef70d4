use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use serde_json::Value;

use crate::server::{
    config::Environment,
    data::fake::{FakeMissionStore, FakeUserStore},
    middleware::test::{recording_handler, RecordingLogger},
    router::router,
    state::AppState,
};


/// Builds the full application router over in-memory stores.
fn app(users: FakeUserStore, missions: FakeMissionStore) -> (Router, Arc<RecordingLogger>) {
    let (errors, logger) = recording_handler(Environment::Development);
    let state = AppState::new(Arc::new(users), Arc::new(missions), errors);
    (router(state), logger)
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    raw_json_request(method, uri, body.to_string())
}

fn raw_json_request(method: Method, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}
