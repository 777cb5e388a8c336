use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000003_create_discord_user_table::DiscordUser,
    m20250302_000007_create_discord_thread_table::DiscordThread,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordMessage::Table)
                    .if_not_exists()
                    .col(string(DiscordMessage::Id).primary_key())
                    .col(string(DiscordMessage::ThreadId))
                    .col(text(DiscordMessage::Content))
                    .col(string(DiscordMessage::AuthorId))
                    .col(string_null(DiscordMessage::ParentId))
                    .col(timestamp_with_time_zone(DiscordMessage::CreatedAt))
                    .col(timestamp_with_time_zone(DiscordMessage::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_message_thread_id")
                            .from(DiscordMessage::Table, DiscordMessage::ThreadId)
                            .to(DiscordThread::Table, DiscordThread::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_message_author_id")
                            .from(DiscordMessage::Table, DiscordMessage::AuthorId)
                            .to(DiscordUser::Table, DiscordUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_message_parent_id")
                            .from(DiscordMessage::Table, DiscordMessage::ParentId)
                            .to(DiscordMessage::Table, DiscordMessage::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordMessage {
    Table,
    Id,
    ThreadId,
    Content,
    AuthorId,
    ParentId,
    CreatedAt,
    UpdatedAt,
}
