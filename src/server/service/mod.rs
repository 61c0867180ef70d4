//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They apply the business rules (validation, existence and uniqueness checks) and
//! work with domain models rather than DTOs or entity models. Services borrow a
//! store trait object so tests can run them against in-memory fakes.

pub mod mission;
pub mod user;
