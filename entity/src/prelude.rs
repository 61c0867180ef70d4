pub use super::mission::Entity as Mission;
pub use super::user::Entity as User;
