//! Database repository layer for all domain entities.
//!
//! Each domain exposes a store trait describing the queries the services need and
//! a SeaORM repository implementing it. Services only see the traits, so tests can
//! swap in the in-memory fakes from `fake`. Repositories convert entity models into
//! domain models before returning them.

pub mod mission;
pub mod user;

#[cfg(test)]
pub mod fake;

#[cfg(test)]
mod test;
