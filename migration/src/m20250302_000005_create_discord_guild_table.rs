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
                    .table(DiscordGuild::Table)
                    .if_not_exists()
                    .col(string(DiscordGuild::Id).primary_key())
                    .col(string(DiscordGuild::Name))
                    .col(string_null(DiscordGuild::Icon))
                    .col(integer_uniq(DiscordGuild::CommunityId))
                    .col(timestamp_with_time_zone_null(DiscordGuild::LastSyncAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_guild_community_id")
                            .from(DiscordGuild::Table, DiscordGuild::CommunityId)
                            .to(Community::Table, Community::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordGuild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordGuild {
    Table,
    Id,
    Name,
    Icon,
    CommunityId,
    LastSyncAt,
}
