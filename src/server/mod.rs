//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and data layer
//! - **Data Layer** (`data/`) - Store traits, database repositories and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and their classification
//! - **Middleware** (`middleware/`) - Error boundary, error handler and not-found fallback
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (stores, error handler)
//! - **Startup** (`startup`) - Tracing, database, CORS and shutdown setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Response** (`response`) - Success envelope shared by every handler
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts the request, converts DTOs to params, calls service
//! 3. **Service** applies business rules and calls the store
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO and wraps it in the success envelope
//! 6. On failure, the **boundary** middleware hands the error to the error handler,
//!    which classifies, logs and renders it

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod response;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
