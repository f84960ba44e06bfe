use entity::{
    teams,
    users::{self, constraints::*},
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(users::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(users::Column::Id).string_len(255).not_null())
                    .col(
                        ColumnDef::new(users::Column::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(users::Column::Team)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(users::Column::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .primary_key(Index::create().name(PK_USERS).col(users::Column::Id))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USERS_TEAM)
                            .from(users::Entity, users::Column::Team)
                            .to(teams::Entity, teams::Column::Name)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USERS_TEAM_ACTIVE)
                    .table(users::Entity)
                    .col(users::Column::Team)
                    .col(users::Column::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(users::Entity).to_owned())
            .await
    }
}
