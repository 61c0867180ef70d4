//! Request/response processing around the route handlers.
//!
//! - `boundary` - funnels failed handler computations into the error handler
//! - `error` - the error handler and its logging capability
//! - `not_found` - fallback for requests matching no route

pub mod boundary;
pub mod error;
pub mod not_found;

#[cfg(test)]
pub mod test;
