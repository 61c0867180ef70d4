//! Mission data repository.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::mission::MissionDashboard;

/// Queries needed by the mission service.
#[async_trait]
pub trait MissionStore: Send + Sync {
    /// Missions followed by the collaborator with this email.
    async fn get_by_collaborator_email(&self, email: &str) -> Result<Vec<MissionDashboard>, DbErr>;
}

pub struct MissionRepository {
    db: DatabaseConnection,
}

impl MissionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MissionStore for MissionRepository {
    /// Gets the dashboard rows of one collaborator.
    ///
    /// Matches the email exactly and orders by group number, then client number.
    ///
    /// # Returns
    /// - `Ok(Vec<MissionDashboard>)` - The collaborator's missions (empty if none)
    /// - `Err(DbErr)` - Database error during query
    async fn get_by_collaborator_email(&self, email: &str) -> Result<Vec<MissionDashboard>, DbErr> {
        let entities = entity::prelude::Mission::find()
            .filter(entity::mission::Column::CollaboratorEmail.eq(email))
            .order_by_asc(entity::mission::Column::NumeroGroupe)
            .order_by_asc(entity::mission::Column::NumeroClient)
            .all(&self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MissionDashboard::from_entity)
            .collect())
    }
}
