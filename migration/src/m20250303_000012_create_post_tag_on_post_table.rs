use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_post_tag_table::PostTag, m20250303_000010_create_post_table::Post,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostTagOnPost::Table)
                    .if_not_exists()
                    .col(integer(PostTagOnPost::PostId))
                    .col(integer(PostTagOnPost::TagId))
                    .primary_key(
                        Index::create()
                            .col(PostTagOnPost::PostId)
                            .col(PostTagOnPost::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_tag_on_post_post_id")
                            .from(PostTagOnPost::Table, PostTagOnPost::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_tag_on_post_tag_id")
                            .from(PostTagOnPost::Table, PostTagOnPost::TagId)
                            .to(PostTag::Table, PostTag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostTagOnPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostTagOnPost {
    Table,
    PostId,
    TagId,
}
