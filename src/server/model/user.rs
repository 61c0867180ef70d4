//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto};

/// An application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub nom: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            nom: self.nom,
            email: self.email,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            nom: entity.nom,
            email: entity.email,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParam {
    pub nom: String,
    pub email: String,
}

impl CreateUserParam {
    /// Converts the request payload, trimming surrounding whitespace.
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            nom: dto.nom.trim().to_string(),
            email: dto.email.trim().to_string(),
        }
    }
}

/// Parameters for updating a user. Both fields replace the stored values.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUserParam {
    pub nom: String,
    pub email: String,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            nom: dto.nom.trim().to_string(),
            email: dto.email.trim().to_string(),
        }
    }
}
