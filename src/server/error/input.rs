//! Loosely shaped error values handed to the classifier.
//!
//! Any layer may fail with a value carrying some subset of `kind`, `code`,
//! `status`, `message` and `details`. Nothing is guaranteed to be present, so
//! every field is optional and parsing from arbitrary JSON never fails.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Kind tag marking a validation failure.
pub const VALIDATION_KIND: &str = "ValidationError";

/// Code marking a failure of the data store.
pub const DATABASE_CODE: &str = "E_DATABASE_ERROR";

/// An error of unknown shape, as received by the error handler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorInput {
    pub kind: Option<String>,
    pub code: Option<String>,
    pub status: Option<u16>,
    pub message: Option<String>,
    pub details: Option<Value>,
}

impl ErrorInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Reads an error value from arbitrary JSON.
    ///
    /// Objects contribute whichever recognized keys they carry (`name` is read as
    /// `kind`, `errors` as `details`); a bare string becomes the message; anything
    /// else yields an empty input. Keys holding a value of the wrong type are
    /// ignored, so a `status` of `"404"` counts as absent.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                kind: text(map, &["kind", "name"]),
                code: text(map, &["code"]),
                status: map
                    .get("status")
                    .and_then(Value::as_u64)
                    .and_then(|status| u16::try_from(status).ok()),
                message: text(map, &["message"]),
                details: ["details", "errors"]
                    .iter()
                    .filter_map(|key| map.get(*key))
                    .find(|value| !value.is_null())
                    .cloned(),
            },
            Value::String(message) => Self::new().with_message(message.clone()),
            _ => Self::default(),
        }
    }
}

fn text(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find_map(Value::as_str)
        .map(str::to_string)
}

impl From<Value> for ErrorInput {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl<'de> Deserialize<'de> for ErrorInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Self::from_value(&value))
    }
}
