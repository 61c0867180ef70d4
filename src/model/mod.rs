//! Wire-level DTOs shared by every endpoint.

pub mod api;
pub mod mission;
pub mod user;
