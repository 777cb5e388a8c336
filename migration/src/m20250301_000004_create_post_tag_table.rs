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
                    .table(PostTag::Table)
                    .if_not_exists()
                    .col(pk_auto(PostTag::Id))
                    .col(integer(PostTag::CommunityId))
                    .col(string(PostTag::Name))
                    .col(string(PostTag::Color).default("#000000"))
                    .col(string_null(PostTag::DiscordTagId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_tag_community_id")
                            .from(PostTag::Table, PostTag::CommunityId)
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
            .drop_table(Table::drop().table(PostTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostTag {
    Table,
    Id,
    CommunityId,
    Name,
    Color,
    DiscordTagId,
}
