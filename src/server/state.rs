//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - the user and mission stores, behind trait objects so tests can swap in fakes
//! - the error handler used by the boundary middleware

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        mission::{MissionRepository, MissionStore},
        user::{UserRepository, UserStore},
    },
    middleware::error::ErrorHandler,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the stores are reference-counted and the
/// error handler holds an `Arc` to its logger.
#[derive(Clone)]
pub struct AppState {
    /// Persistence for users.
    pub users: Arc<dyn UserStore>,

    /// Persistence for the missions dashboard.
    pub missions: Arc<dyn MissionStore>,

    /// Classifies, logs and renders every failed request.
    pub errors: ErrorHandler,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `users` - User store
    /// - `missions` - Mission store
    /// - `errors` - Error handler shared with the boundary middleware
    pub fn new(
        users: Arc<dyn UserStore>,
        missions: Arc<dyn MissionStore>,
        errors: ErrorHandler,
    ) -> Self {
        Self {
            users,
            missions,
            errors,
        }
    }

    /// Creates the production state, backing both stores with the database pool.
    pub fn from_database(db: DatabaseConnection, errors: ErrorHandler) -> Self {
        Self::new(
            Arc::new(UserRepository::new(db.clone())),
            Arc::new(MissionRepository::new(db)),
            errors,
        )
    }
}
