//! Maps error values to an HTTP status and response body.
//!
//! Classification is an ordered list of guards, first match wins:
//!
//! 1. `kind` is the validation tag: 400, the error's own message and details.
//! 2. `code` is the database tag: 500, a fixed message in every environment.
//! 3. Anything else: the error's numeric `status` or 500, the generic label, and
//!    the error's own message unless running in production.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{
    model::api::ErrorDto,
    server::{
        config::Environment,
        error::input::{ErrorInput, DATABASE_CODE, VALIDATION_KIND},
    },
};

pub const VALIDATION_LABEL: &str = "Erreur de validation";
pub const DATABASE_LABEL: &str = "Erreur de base de données";
pub const DATABASE_MESSAGE: &str = "Une erreur s'est produite lors de l'accès aux données";
pub const INTERNAL_LABEL: &str = "Erreur interne du serveur";
/// Message safe to show to anyone, used in production and whenever no message exists.
pub const SAFE_MESSAGE: &str = "Une erreur inattendue s'est produite";

/// Pre-rendered body sent when the classified body cannot be serialized.
const FALLBACK_BODY: &str =
    r#"{"error":"Erreur interne du serveur","message":"Une erreur inattendue s'est produite"}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Database,
    Internal,
}

impl ErrorCategory {
    /// Label sent to clients in the `error` field.
    pub fn label(self) -> &'static str {
        match self {
            Self::Validation => VALIDATION_LABEL,
            Self::Database => DATABASE_LABEL,
            Self::Internal => INTERNAL_LABEL,
        }
    }

    /// Short name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Database => "database",
            Self::Internal => "internal",
        }
    }
}

/// Outcome of classifying one error.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: ErrorCategory,
    pub status: StatusCode,
    pub body: ErrorDto,
}

impl Classification {
    /// Generic internal error used when the input cannot be formatted as asked.
    pub fn fallback() -> Self {
        Self {
            category: ErrorCategory::Internal,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorDto {
                error: ErrorCategory::Internal.label().to_string(),
                message: SAFE_MESSAGE.to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for Classification {
    fn into_response(self) -> Response {
        let json = HeaderValue::from_static("application/json");

        match serde_json::to_vec(&self.body) {
            Ok(bytes) => (self.status, [(header::CONTENT_TYPE, json)], bytes).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize error body: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, json)],
                    FALLBACK_BODY,
                )
                    .into_response()
            }
        }
    }
}

/// Informational, `204 No Content`, `205 Reset Content` and `304 Not Modified`
/// responses are sent without a body, so they cannot carry an error.
fn can_carry_body(status: StatusCode) -> bool {
    !(status.is_informational()
        || status == StatusCode::NO_CONTENT
        || status == StatusCode::RESET_CONTENT
        || status == StatusCode::NOT_MODIFIED)
}

/// Classifies errors for one running environment.
///
/// The environment is fixed at construction so classification is a pure
/// function of the error value.
#[derive(Debug, Clone, Copy)]
pub struct ErrorClassifier {
    environment: Environment,
}

impl ErrorClassifier {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    pub fn classify(&self, error: &ErrorInput) -> Classification {
        match (error.kind.as_deref(), error.code.as_deref()) {
            (Some(VALIDATION_KIND), _) => Classification {
                category: ErrorCategory::Validation,
                status: StatusCode::BAD_REQUEST,
                body: ErrorDto {
                    error: ErrorCategory::Validation.label().to_string(),
                    message: error
                        .message
                        .clone()
                        .unwrap_or_else(|| ErrorCategory::Validation.label().to_string()),
                    details: error.details.clone(),
                },
            },
            (_, Some(DATABASE_CODE)) => Classification {
                category: ErrorCategory::Database,
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: ErrorDto {
                    error: ErrorCategory::Database.label().to_string(),
                    message: DATABASE_MESSAGE.to_string(),
                    details: None,
                },
            },
            _ => {
                let status = match error.status {
                    None => StatusCode::INTERNAL_SERVER_ERROR,
                    Some(code) => match StatusCode::from_u16(code) {
                        Ok(status) if can_carry_body(status) => status,
                        _ => return Classification::fallback(),
                    },
                };

                let message = match (&error.message, self.environment.is_production()) {
                    (Some(message), false) => message.clone(),
                    _ => SAFE_MESSAGE.to_string(),
                };

                Classification {
                    category: ErrorCategory::Internal,
                    status,
                    body: ErrorDto {
                        error: ErrorCategory::Internal.label().to_string(),
                        message,
                        details: None,
                    },
                }
            }
        }
    }
}
