use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mission::Table)
                    .if_not_exists()
                    .col(pk_auto(Mission::Id))
                    .col(string(Mission::CollaboratorEmail))
                    .col(string(Mission::NumeroGroupe))
                    .col(string(Mission::NomGroupe))
                    .col(string(Mission::NumeroClient))
                    .col(string(Mission::NomClient))
                    .col(string(Mission::Mission))
                    .col(boolean(Mission::Lab).default(false))
                    .col(boolean(Mission::ConflitCheck).default(false))
                    .col(boolean(Mission::Qac).default(false))
                    .col(boolean(Mission::Qam).default(false))
                    .col(boolean(Mission::Ldm).default(false))
                    .col(boolean(Mission::Nog).default(false))
                    .col(boolean(Mission::Checklist).default(false))
                    .col(boolean(Mission::Revision).default(false))
                    .col(boolean(Mission::Supervision).default(false))
                    .col(boolean(Mission::NdsCr).default(false))
                    .col(boolean(Mission::Qmm).default(false))
                    .col(boolean(Mission::Plaquette).default(false))
                    .col(boolean(Mission::Restitution).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_missions_collaborator_email")
                    .table(Mission::Table)
                    .col(Mission::CollaboratorEmail)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mission {
    #[sea_orm(iden = "missions")]
    Table,
    Id,
    CollaboratorEmail,
    NumeroGroupe,
    NomGroupe,
    NumeroClient,
    NomClient,
    Mission,
    Lab,
    ConflitCheck,
    Qac,
    Qam,
    Ldm,
    Nog,
    Checklist,
    Revision,
    Supervision,
    NdsCr,
    Qmm,
    Plaquette,
    Restitution,
}
