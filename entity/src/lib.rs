//! SeaORM entities for the mission dashboard database.

pub mod mission;
pub mod prelude;
pub mod user;
