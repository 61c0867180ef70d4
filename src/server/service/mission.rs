use crate::server::{data::mission::MissionStore, error::AppError, model::mission::MissionDashboard};

pub struct MissionService<'a> {
    store: &'a dyn MissionStore,
}

impl<'a> MissionService<'a> {
    pub fn new(store: &'a dyn MissionStore) -> Self {
        Self { store }
    }

    /// Gets the dashboard of every mission followed by a collaborator
    ///
    /// The email is used as given; an unknown email yields an empty dashboard.
    pub async fn get_all_missions_dashboard(
        &self,
        email: &str,
    ) -> Result<Vec<MissionDashboard>, AppError> {
        let missions = self.store.get_by_collaborator_email(email).await?;
        tracing::debug!(count = missions.len(), "loaded missions dashboard");

        Ok(missions)
    }
}
