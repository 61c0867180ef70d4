use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub nom: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /api/users`.
///
/// Missing fields deserialize as empty strings so that presence checks report
/// them as validation failures instead of body parsing errors.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateUserDto {
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub email: String,
}

/// Payload for `PUT /api/users/{id}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub email: String,
}
