mod model;
mod server;

use std::{net::SocketAddr, sync::Arc};

use crate::server::{
    config::Config,
    error::{classify::ErrorClassifier, AppError},
    middleware::error::{ErrorHandler, TracingErrorLogger},
    router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cors = startup::cors_layer(&config)?;

    let errors = ErrorHandler::new(
        ErrorClassifier::new(config.environment),
        Arc::new(TracingErrorLogger),
    );
    let state = AppState::from_database(db, errors);
    let app = router::router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        "Starting server on {} ({} environment)",
        config.bind_addr,
        config.environment
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(startup::shutdown_signal())
    .await?;

    Ok(())
}
