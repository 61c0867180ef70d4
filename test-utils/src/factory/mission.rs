//! Mission factory for creating test mission entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test missions with customizable fields.
///
/// Every checklist step defaults to not done. Use `steps` to mark the steps of
/// a mission by column name.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::mission::MissionFactory;
///
/// let mission = MissionFactory::new(&db, "collab@test.com")
///     .numero_groupe("001")
///     .steps(&["lab", "conflit_check", "nog"])
///     .build()
///     .await?;
/// ```
pub struct MissionFactory<'a> {
    db: &'a DatabaseConnection,
    collaborator_email: String,
    numero_groupe: String,
    nom_groupe: String,
    numero_client: String,
    nom_client: String,
    mission: String,
    done: Vec<String>,
}

impl<'a> MissionFactory<'a> {
    /// Creates a new MissionFactory with default values for the given collaborator.
    ///
    /// Defaults:
    /// - numero_groupe: `"G{n}"`, nom_groupe: `"Groupe {n}"`
    /// - numero_client: `"CLI{n}"`, nom_client: `"Client {n}"`
    /// - mission: `"Mission EC"`
    pub fn new(db: &'a DatabaseConnection, collaborator_email: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            collaborator_email: collaborator_email.into(),
            numero_groupe: format!("G{:03}", id),
            nom_groupe: format!("Groupe {}", id),
            numero_client: format!("CLI{:03}", id),
            nom_client: format!("Client {}", id),
            mission: "Mission EC".to_string(),
            done: Vec::new(),
        }
    }

    /// Sets the group number.
    pub fn numero_groupe(mut self, numero_groupe: impl Into<String>) -> Self {
        self.numero_groupe = numero_groupe.into();
        self
    }

    /// Sets the client number.
    pub fn numero_client(mut self, numero_client: impl Into<String>) -> Self {
        self.numero_client = numero_client.into();
        self
    }

    /// Sets the mission label.
    pub fn mission(mut self, mission: impl Into<String>) -> Self {
        self.mission = mission.into();
        self
    }

    /// Marks the named checklist steps as done.
    ///
    /// Names match the column names of the `missions` table (e.g. `"conflit_check"`).
    pub fn steps(mut self, steps: &[&str]) -> Self {
        self.done = steps.iter().map(|s| s.to_string()).collect();
        self
    }

    fn is_done(&self, step: &str) -> bool {
        self.done.iter().any(|s| s == step)
    }

    /// Builds and inserts the mission entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mission::Model)` - Created mission entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mission::Model, DbErr> {
        entity::mission::ActiveModel {
            lab: ActiveValue::Set(self.is_done("lab")),
            conflit_check: ActiveValue::Set(self.is_done("conflit_check")),
            qac: ActiveValue::Set(self.is_done("qac")),
            qam: ActiveValue::Set(self.is_done("qam")),
            ldm: ActiveValue::Set(self.is_done("ldm")),
            nog: ActiveValue::Set(self.is_done("nog")),
            checklist: ActiveValue::Set(self.is_done("checklist")),
            revision: ActiveValue::Set(self.is_done("revision")),
            supervision: ActiveValue::Set(self.is_done("supervision")),
            nds_cr: ActiveValue::Set(self.is_done("nds_cr")),
            qmm: ActiveValue::Set(self.is_done("qmm")),
            plaquette: ActiveValue::Set(self.is_done("plaquette")),
            restitution: ActiveValue::Set(self.is_done("restitution")),
            collaborator_email: ActiveValue::Set(self.collaborator_email),
            numero_groupe: ActiveValue::Set(self.numero_groupe),
            nom_groupe: ActiveValue::Set(self.nom_groupe),
            numero_client: ActiveValue::Set(self.numero_client),
            nom_client: ActiveValue::Set(self.nom_client),
            mission: ActiveValue::Set(self.mission),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mission with default values for the given collaborator.
pub async fn create_mission(
    db: &DatabaseConnection,
    collaborator_email: &str,
) -> Result<entity::mission::Model, DbErr> {
    MissionFactory::new(db, collaborator_email).build().await
}
