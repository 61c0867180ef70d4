//! Boundary between route handlers and the error handler.
//!
//! A failing handler returns `Err(AppError)`, whose response is only a marker
//! carrying the original error. [`boundary`] runs the rest of the stack, takes
//! the marker off the response and hands the error, unchanged, to the
//! [`ErrorHandler`]. Successful responses pass through untouched, so a handler
//! behaves the same whether its future was pending or already settled.

use std::{any::Any, sync::Arc};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::server::{
    error::{input::ErrorInput, AppError},
    middleware::error::{ErrorHandler, RequestInfo},
};

/// Response extension marking a failed handler computation.
#[derive(Clone, Debug)]
struct Rejection(Arc<ErrorInput>);

/// Builds the placeholder response for a failed computation.
pub fn reject(error: ErrorInput) -> Response {
    let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
    response.extensions_mut().insert(Rejection(Arc::new(error)));
    response
}

/// Removes the rejection marker from a response, returning the error it carried.
pub fn take_rejection(response: &mut Response) -> Option<ErrorInput> {
    response
        .extensions_mut()
        .remove::<Rejection>()
        .map(|Rejection(error)| Arc::unwrap_or_clone(error))
}

/// Middleware routing rejected responses to the error handler.
///
/// Install with `axum::middleware::from_fn_with_state(error_handler, boundary)`
/// outside every layer that may produce a rejection.
pub async fn boundary(
    State(handler): State<ErrorHandler>,
    request: Request,
    next: Next,
) -> Response {
    let info = RequestInfo::from_request(&request);

    let mut response = next.run(request).await;

    match take_rejection(&mut response) {
        Some(error) => handler.handle(&error, &info),
        None => response,
    }
}

/// Converts a handler panic into a rejection.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom` so a panicking
/// handler reaches the error handler like any other failure.
pub fn panic_rejection(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Request handler panicked".to_string()
    };

    tracing::error!("Request handler panicked: {}", message);

    AppError::InternalError(message).into_response()
}
