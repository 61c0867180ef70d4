use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;
use tracing::Level;

use crate::server::{
    config::Environment,
    error::classify::ErrorClassifier,
    middleware::error::{ErrorHandler, ErrorLogMeta, ErrorLogger},
};


/// A logged error as captured by [`RecordingLogger`].
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub meta: ErrorLogMeta,
}

/// Logger keeping every entry in memory.
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl ErrorLogger for RecordingLogger {
    fn log(&self, level: Level, message: &str, metadata: &ErrorLogMeta) {
        self.entries.lock().unwrap().push(LogEntry {
            level,
            message: message.to_string(),
            meta: metadata.clone(),
        });
    }
}

/// Logger that always panics.
pub struct PanickingLogger;

impl ErrorLogger for PanickingLogger {
    fn log(&self, _level: Level, _message: &str, _metadata: &ErrorLogMeta) {
        panic!("logger unavailable");
    }
}

/// Creates an error handler for `environment` together with its recording logger.
pub fn recording_handler(environment: Environment) -> (ErrorHandler, Arc<RecordingLogger>) {
    let logger = Arc::new(RecordingLogger::default());
    let handler = ErrorHandler::new(ErrorClassifier::new(environment), logger.clone());
    (handler, logger)
}

/// Reads a response body as JSON.
pub async fn json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
