//! Success envelope for API responses.
//!
//! Every successful endpoint answers with
//! `{ success: true, data, count?, message?, timestamp }`. Sequences carry their
//! length in `count`; mutations carry a `message` describing the action.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::model::api::SuccessDto;

/// A success envelope together with its HTTP status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub body: SuccessDto<T>,
}

impl<T> ApiResponse<T> {
    /// Wraps a single record, without `count`.
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            body: SuccessDto {
                success: true,
                data,
                count: None,
                message: None,
                timestamp: timestamp(),
            },
        }
    }

    /// Wraps a newly created record: 201 with a message.
    pub fn created(data: T, message: impl Into<String>) -> Self {
        let mut response = Self::ok(data).with_message(message);
        response.status = StatusCode::CREATED;
        response
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.body.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wraps a sequence, with `count` set to its length.
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        let mut response = Self::ok(data);
        response.body.count = Some(count);
        response
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g. `2025-09-02T08:15:30.123Z`.
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
