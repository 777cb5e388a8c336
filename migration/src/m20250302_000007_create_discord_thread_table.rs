use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000003_create_discord_user_table::DiscordUser,
    m20250302_000006_create_discord_channel_table::DiscordChannel,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordThread::Table)
                    .if_not_exists()
                    .col(string(DiscordThread::Id).primary_key())
                    .col(string(DiscordThread::ChannelId))
                    .col(string(DiscordThread::Title))
                    .col(string(DiscordThread::StarterMessageId))
                    .col(text(DiscordThread::StarterMessageContent))
                    .col(string(DiscordThread::AuthorId))
                    .col(timestamp_with_time_zone(DiscordThread::CreatedAt))
                    .col(timestamp_with_time_zone(DiscordThread::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_thread_channel_id")
                            .from(DiscordThread::Table, DiscordThread::ChannelId)
                            .to(DiscordChannel::Table, DiscordChannel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_thread_author_id")
                            .from(DiscordThread::Table, DiscordThread::AuthorId)
                            .to(DiscordUser::Table, DiscordUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordThread::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordThread {
    Table,
    Id,
    ChannelId,
    Title,
    StarterMessageId,
    StarterMessageContent,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}
