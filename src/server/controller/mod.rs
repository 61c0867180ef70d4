//! HTTP request handlers.
//!
//! Controllers extract the request, convert DTOs into domain parameters, call the
//! matching service and wrap the result in the success envelope. Extraction
//! failures are taken as `Result` so they reach the error handler as validation
//! errors instead of axum's plain-text rejections.

pub mod health;
pub mod mission;
pub mod user;

#[cfg(test)]
mod test;
