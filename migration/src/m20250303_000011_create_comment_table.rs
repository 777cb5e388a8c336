use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_user_table::User,
    m20250302_000008_create_discord_message_table::DiscordMessage,
    m20250303_000010_create_post_table::Post,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(integer(Comment::PostId))
                    .col(integer_null(Comment::AuthorId))
                    .col(integer_null(Comment::ParentId))
                    .col(text(Comment::Content))
                    .col(string_null(Comment::DiscordMessageId).unique_key())
                    .col(boolean(Comment::IsAcceptedAnswer).default(false))
                    .col(timestamp_with_time_zone(Comment::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Comment::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_post_id")
                            .from(Comment::Table, Comment::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_author_id")
                            .from(Comment::Table, Comment::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_parent_id")
                            .from(Comment::Table, Comment::ParentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_discord_message_id")
                            .from(Comment::Table, Comment::DiscordMessageId)
                            .to(DiscordMessage::Table, DiscordMessage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    Table,
    Id,
    PostId,
    AuthorId,
    ParentId,
    Content,
    DiscordMessageId,
    IsAcceptedAnswer,
    CreatedAt,
    UpdatedAt,
}
