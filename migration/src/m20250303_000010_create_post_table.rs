use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_community_table::Community,
    m20250301_000002_create_user_table::User,
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
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk_auto(Post::Id))
                    .col(integer(Post::CommunityId))
                    .col(integer_null(Post::AuthorId))
                    .col(string(Post::Title))
                    .col(text(Post::Content))
                    .col(string(Post::PostType))
                    .col(string_null(Post::QuestionStatus))
                    .col(string_null(Post::FeedbackStatus))
                    .col(boolean(Post::Private).default(false))
                    .col(string_null(Post::DiscordThreadId).unique_key())
                    .col(timestamp_with_time_zone(Post::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Post::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_community_id")
                            .from(Post::Table, Post::CommunityId)
                            .to(Community::Table, Community::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_author_id")
                            .from(Post::Table, Post::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_discord_thread_id")
                            .from(Post::Table, Post::DiscordThreadId)
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
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    CommunityId,
    AuthorId,
    Title,
    Content,
    PostType,
    QuestionStatus,
    FeedbackStatus,
    Private,
    DiscordThreadId,
    CreatedAt,
    UpdatedAt,
}
