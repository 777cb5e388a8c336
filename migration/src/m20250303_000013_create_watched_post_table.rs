use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_user_table::User, m20250303_000010_create_post_table::Post,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WatchedPost::Table)
                    .if_not_exists()
                    .col(integer(WatchedPost::PostId))
                    .col(integer(WatchedPost::UserId))
                    .primary_key(
                        Index::create()
                            .col(WatchedPost::PostId)
                            .col(WatchedPost::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watched_post_post_id")
                            .from(WatchedPost::Table, WatchedPost::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watched_post_user_id")
                            .from(WatchedPost::Table, WatchedPost::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WatchedPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WatchedPost {
    Table,
    PostId,
    UserId,
}
