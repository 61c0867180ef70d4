//! Domain models and operation parameters.
//!
//! Domain models are produced by repositories from database entities and turned
//! into DTOs by controllers. Parameter types carry the input of a single operation.

pub mod mission;
pub mod user;
