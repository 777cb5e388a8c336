use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250302_000007_create_discord_thread_table::DiscordThread,
    m20250302_000008_create_discord_message_table::DiscordMessage,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordMessageAttachment::Table)
                    .if_not_exists()
                    .col(string(DiscordMessageAttachment::Id).primary_key())
                    .col(string_null(DiscordMessageAttachment::MessageId))
                    .col(string_null(DiscordMessageAttachment::ThreadId))
                    .col(string(DiscordMessageAttachment::Name))
                    .col(string_null(DiscordMessageAttachment::ContentType))
                    .col(big_integer(DiscordMessageAttachment::Size))
                    .col(text(DiscordMessageAttachment::Url))
                    .col(string(DiscordMessageAttachment::ObjectKey))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_message_attachment_message_id")
                            .from(
                                DiscordMessageAttachment::Table,
                                DiscordMessageAttachment::MessageId,
                            )
                            .to(DiscordMessage::Table, DiscordMessage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discord_message_attachment_thread_id")
                            .from(
                                DiscordMessageAttachment::Table,
                                DiscordMessageAttachment::ThreadId,
                            )
                            .to(DiscordThread::Table, DiscordThread::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(DiscordMessageAttachment::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordMessageAttachment {
    Table,
    Id,
    MessageId,
    ThreadId,
    Name,
    ContentType,
    Size,
    Url,
    ObjectKey,
}
