//! Error types and HTTP response handling.
//!
//! `AppError` is the typed error returned by services and handlers. It never
//! renders itself: converting it into a response only marks the response as
//! rejected and attaches the error as an [`ErrorInput`]. The boundary middleware
//! then hands that input to the error handler, which is the single place where
//! errors become HTTP statuses and bodies (see [`classify`]).

pub mod classify;
pub mod config;
pub mod input;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{
    error::{
        config::ConfigError,
        input::{ErrorInput, DATABASE_CODE, VALIDATION_KIND},
    },
    middleware::boundary,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Each
/// variant maps to the fields of [`ErrorInput`] the classifier acts upon.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Classified as a database failure; its message never reaches the client.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Client supplied data failing presence or shape checks.
    ///
    /// Results in 400 Bad Request; message and details are sent as-is.
    #[error("{message}")]
    Validation {
        /// Human-readable summary
        message: String,
        /// Per-field detail, sent to the client verbatim
        details: Option<serde_json::Value>,
    },

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Request conflicts with existing data, such as a duplicate email.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The message is only disclosed
    /// outside production.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text(), None)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation(rejection.body_text(), None)
    }
}

impl From<AppError> for ErrorInput {
    fn from(err: AppError) -> Self {
        let message = err.to_string();

        match err {
            AppError::Validation { details, .. } => {
                let input = ErrorInput::new()
                    .with_kind(VALIDATION_KIND)
                    .with_message(message);
                match details {
                    Some(details) => input.with_details(details),
                    None => input,
                }
            }
            AppError::DbErr(_) => ErrorInput::new()
                .with_code(DATABASE_CODE)
                .with_message(message),
            AppError::NotFound(_) => ErrorInput::new().with_status(404).with_message(message),
            AppError::Conflict(_) => ErrorInput::new().with_status(409).with_message(message),
            AppError::ConfigErr(_) | AppError::Io(_) | AppError::InternalError(_) => {
                ErrorInput::new().with_message(message)
            }
        }
    }
}

/// Hands the error to the boundary middleware for classification.
///
/// The returned response is a placeholder 500 carrying the error; it is
/// replaced by the classified response before leaving the router.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        boundary::reject(self.into())
    }
}
