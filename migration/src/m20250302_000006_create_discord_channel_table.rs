use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_post_tag_table::PostTag,
    m20250302_000005_create_discord_guild_table::DiscordGuild,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordChannel::Table)
                    .if_not_exists()
                    .col(string(DiscordChannel::Id).primary_key())
                    .col(string(DiscordChannel::GuildId))
                    .col(string(DiscordChannel::Name))
                    .col(integer(DiscordChannel::Kind))
                    .col(boolean(DiscordChannel::ShouldSync).default(false))
                    .col(string(DiscordChannel::DefaultPostType).default("QUESTION"))
                    .col(integer_null(DiscordChannel::DefaultPostTagId))
                    .col(string_null(DiscordChannel::InviteLink))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_channel_guild_id")
                            .from(DiscordChannel::Table, DiscordChannel::GuildId)
                            .to(DiscordGuild::Table, DiscordGuild::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_channel_default_post_tag_id")
                            .from(DiscordChannel::Table, DiscordChannel::DefaultPostTagId)
                            .to(PostTag::Table, PostTag::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordChannel {
    Table,
    Id,
    GuildId,
    Name,
    Kind,
    ShouldSync,
    DefaultPostType,
    DefaultPostTagId,
    InviteLink,
}
