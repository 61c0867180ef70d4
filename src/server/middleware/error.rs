//! Terminal error handler.
//!
//! Classifies an [`ErrorInput`], reports it through an injected [`ErrorLogger`]
//! and renders the response. Logging is fire-and-forget: a logger that panics
//! is contained and the response goes out unchanged.

use std::{
    fmt,
    net::SocketAddr,
    panic::{catch_unwind, AssertUnwindSafe},
    sync::Arc,
};

use axum::{
    extract::{ConnectInfo, Request},
    http::Method,
    response::{IntoResponse, Response},
};
use tracing::Level;

use crate::server::error::{
    classify::{Classification, ErrorClassifier},
    input::ErrorInput,
};

/// Request attributes reported alongside an error.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestInfo {
    pub method: Method,
    /// Path without query string.
    pub path: String,
    /// Peer address, or `"unknown"` when the server does not record it.
    pub origin: String,
}

impl RequestInfo {
    pub fn from_request(request: &Request) -> Self {
        let origin = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            method: request.method().clone(),
            path: request.uri().path().to_string(),
            origin,
        }
    }
}

/// Structured fields attached to an error log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorLogMeta {
    pub category: &'static str,
    pub status: u16,
    pub method: String,
    pub path: String,
    pub origin: String,
}

/// Destination for error reports.
pub trait ErrorLogger: Send + Sync {
    fn log(&self, level: Level, message: &str, metadata: &ErrorLogMeta);
}

/// Emits error reports as `tracing` events.
pub struct TracingErrorLogger;

impl ErrorLogger for TracingErrorLogger {
    fn log(&self, level: Level, message: &str, meta: &ErrorLogMeta) {
        match level {
            Level::ERROR => tracing::error!(
                category = meta.category,
                status = meta.status,
                method = %meta.method,
                path = %meta.path,
                origin = %meta.origin,
                "{}",
                message
            ),
            Level::WARN => tracing::warn!(
                category = meta.category,
                status = meta.status,
                method = %meta.method,
                path = %meta.path,
                origin = %meta.origin,
                "{}",
                message
            ),
            _ => tracing::info!(
                category = meta.category,
                status = meta.status,
                method = %meta.method,
                path = %meta.path,
                origin = %meta.origin,
                "{}",
                message
            ),
        }
    }
}

/// Turns errors into responses. Cheap to clone.
#[derive(Clone)]
pub struct ErrorHandler {
    classifier: ErrorClassifier,
    logger: Arc<dyn ErrorLogger>,
}

impl fmt::Debug for ErrorHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorHandler")
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

impl ErrorHandler {
    pub fn new(classifier: ErrorClassifier, logger: Arc<dyn ErrorLogger>) -> Self {
        Self { classifier, logger }
    }

    /// Classifies `error`, logs it and renders the final response.
    ///
    /// Never fails and never calls further handlers.
    pub fn handle(&self, error: &ErrorInput, request: &RequestInfo) -> Response {
        let classification = self.classifier.classify(error);
        self.report(error, &classification, request);
        classification.into_response()
    }

    fn report(&self, error: &ErrorInput, classification: &Classification, request: &RequestInfo) {
        let level = if classification.status.is_server_error() {
            Level::ERROR
        } else {
            Level::WARN
        };

        // Server-side logs keep the original message even when the client gets a safe one.
        let message = error
            .message
            .as_deref()
            .unwrap_or(classification.body.error.as_str());

        let meta = ErrorLogMeta {
            category: classification.category.as_str(),
            status: classification.status.as_u16(),
            method: request.method.to_string(),
            path: request.path.clone(),
            origin: request.origin.clone(),
        };

        let logged = catch_unwind(AssertUnwindSafe(|| self.logger.log(level, message, &meta)));
        if logged.is_err() {
            tracing::warn!("Error logger panicked while reporting a {} error", meta.status);
        }
    }
}
