//! User data repository for database operations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User};

/// Queries needed by the user service.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users ordered by id.
    async fn get_all(&self) -> Result<Vec<User>, DbErr>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr>;

    async fn create(&self, param: CreateUserParam) -> Result<User, DbErr>;

    /// Replaces name and email. `Ok(None)` when no user has this id.
    async fn update(&self, id: i32, param: UpdateUserParam) -> Result<Option<User>, DbErr>;

    /// Deletes a user, returning the record as it was. `Ok(None)` when absent.
    async fn delete(&self, id: i32) -> Result<Option<User>, DbErr>;

    /// Whether a user other than `exclude_id` already uses `email`.
    async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr>;
}

/// Repository providing database operations for users.
///
/// Holds a clone of the connection pool so it can live in the application state.
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    /// Gets all users.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every user, ordered by id (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(&self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Inserts a new user stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its generated id
    /// - `Err(DbErr)` - Database error, including unique email violations
    async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            nom: ActiveValue::Set(param.nom),
            email: ActiveValue::Set(param.email),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    async fn update(&self, id: i32, param: UpdateUserParam) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.nom = ActiveValue::Set(param.nom);
        active.email = ActiveValue::Set(param.email);
        let entity = active.update(&self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    async fn delete(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        existing.clone().delete(&self.db).await?;

        Ok(Some(User::from_entity(existing)))
    }

    async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(&self.db).await? > 0)
    }
}
