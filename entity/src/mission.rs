use sea_orm::entity::prelude::*;

/// A client engagement followed by a collaborator, with one completion flag per
/// checklist step.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "missions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub collaborator_email: String,
    pub numero_groupe: String,
    pub nom_groupe: String,
    pub numero_client: String,
    pub nom_client: String,
    pub mission: String,

    // Before mission
    pub lab: bool,
    pub conflit_check: bool,
    pub qac: bool,
    pub qam: bool,
    pub ldm: bool,

    // During mission
    pub nog: bool,
    pub checklist: bool,
    pub revision: bool,
    pub supervision: bool,

    // End of mission
    pub nds_cr: bool,
    pub qmm: bool,
    pub plaquette: bool,
    pub restitution: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
