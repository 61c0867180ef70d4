use axum::{
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};

use crate::model::api::ErrorDto;

pub const NOT_FOUND_LABEL: &str = "Route non trouvée";

/// Fallback for requests matching no route.
///
/// Always responds 404 naming the method, uppercased, and the path (without
/// query string) of the request.
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    let method = method.as_str().to_ascii_uppercase();
    tracing::warn!("No route for {} {}", method, uri.path());

    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: NOT_FOUND_LABEL.to_string(),
            message: format!("La route {} {} n'existe pas", method, uri.path()),
            details: None,
        }),
    )
}
