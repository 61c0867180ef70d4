use serde_json::{Map, Value};

use crate::server::{
    data::user::UserStore,
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User},
};

pub const USER_NOT_FOUND: &str = "Utilisateur non trouvé";
pub const EMAIL_TAKEN: &str = "Un utilisateur avec cet email existe déjà";
pub const INVALID_DATA: &str = "Données invalides";

pub struct UserService<'a> {
    store: &'a dyn UserStore,
}

impl<'a> UserService<'a> {
    pub fn new(store: &'a dyn UserStore) -> Self {
        Self { store }
    }

    /// Gets every user
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.store.get_all().await?)
    }

    /// Gets a user by id, failing with 404 when absent
    pub async fn get_user_by_id(&self, id: i32) -> Result<User, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Creates a user after validating the payload and checking email uniqueness
    pub async fn create_user(&self, param: CreateUserParam) -> Result<User, AppError> {
        Self::validate_user_data(&param.nom, &param.email)?;

        if self.store.email_exists(&param.email, None).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let user = self.store.create(param).await?;
        tracing::info!(user_id = user.id, "user created");

        Ok(user)
    }

    /// Replaces a user's name and email
    ///
    /// The email may be kept as is; it only conflicts when another user already has it.
    pub async fn update_user(&self, id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        Self::validate_user_data(&param.nom, &param.email)?;

        self.get_user_by_id(id).await?;

        if self.store.email_exists(&param.email, Some(id)).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        self.store
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Deletes a user, returning the removed record
    pub async fn delete_user(&self, id: i32) -> Result<User, AppError> {
        let user = self
            .store
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;
        tracing::info!(user_id = user.id, "user deleted");

        Ok(user)
    }

    /// Presence checks on user fields.
    ///
    /// # Returns
    /// - `Ok(())` - Both fields are non-blank
    /// - `Err(AppError::Validation)` - `details` maps each blank field to `"required"`
    pub fn validate_user_data(nom: &str, email: &str) -> Result<(), AppError> {
        let mut missing = Map::new();

        if nom.trim().is_empty() {
            missing.insert("nom".to_string(), Value::from("required"));
        }
        if email.trim().is_empty() {
            missing.insert("email".to_string(), Value::from("required"));
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(INVALID_DATA, Some(Value::Object(missing))))
        }
    }
}
