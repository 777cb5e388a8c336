use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_community_table::Community;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(integer(User::CommunityId))
                    .col(string(User::ExternalAuthId))
                    .col(string(User::Username))
                    .col(string(User::Email))
                    .col(string(User::Role).default("MEMBER"))
                    .col(boolean(User::EmailNotificationsEnabled).default(true))
                    .col(boolean(User::AdminEmailNotificationsEnabled).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_community_id")
                            .from(User::Table, User::CommunityId)
                            .to(Community::Table, Community::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_external_auth_id_community_id")
                    .table(User::Table)
                    .col(User::ExternalAuthId)
                    .col(User::CommunityId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    CommunityId,
    ExternalAuthId,
    Username,
    Email,
    Role,
    EmailNotificationsEnabled,
    AdminEmailNotificationsEnabled,
}
