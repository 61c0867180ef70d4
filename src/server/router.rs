use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{health::health, mission::*, user::*},
    middleware::{
        boundary::{boundary, panic_rejection},
        not_found::not_found,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Mission dashboard API"),
    tags(
        (name = "user", description = "User management"),
        (name = "mission", description = "Collaborator missions dashboard")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// Layer order, outermost first: request tracing, the error boundary, panic
/// recovery, then the routes and the not-found fallback.
pub fn router(state: AppState) -> Router {
    let (api, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_all_users, create_user))
        .routes(routes!(get_user_by_id, update_user, delete_user))
        .routes(routes!(get_all_missions_dashboard))
        .split_for_parts();

    api.route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_rejection))
        .layer(from_fn_with_state(state.errors.clone(), boundary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
