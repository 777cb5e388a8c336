use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::discord::UpsertMessageParam;

pub struct DiscordMessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiscordMessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn upsert(&self, param: UpsertMessageParam) -> Result<(), DbErr> {
        entity::prelude::DiscordMessage::insert(entity::discord_message::ActiveModel {
            id: ActiveValue::Set(param.message_id.to_string()),
            thread_id: ActiveValue::Set(param.thread_id.to_string()),
            content: ActiveValue::Set(param.content),
            author_id: ActiveValue::Set(param.author_id.to_string()),
            parent_id: ActiveValue::Set(param.parent_id.map(|id| id.to_string())),
            created_at: ActiveValue::Set(param.created_at),
            updated_at: ActiveValue::Set(param.updated_at),
        })
        .on_conflict(
            OnConflict::column(entity::discord_message::Column::Id)
                .update_columns([
                    entity::discord_message::Column::ThreadId,
                    entity::discord_message::Column::Content,
                    entity::discord_message::Column::AuthorId,
                    entity::discord_message::Column::ParentId,
                    entity::discord_message::Column::CreatedAt,
                    entity::discord_message::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn exists(&self, message_id: u64) -> Result<bool, DbErr> {
        let entity = entity::prelude::DiscordMessage::find_by_id(message_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Counts the mirrored messages replying to `message_id`.
    pub async fn count_replies(&self, message_id: u64) -> Result<u64, DbErr> {
        entity::prelude::DiscordMessage::find()
            .filter(entity::discord_message::Column::ParentId.eq(message_id.to_string()))
            .count(self.db)
            .await
    }

    pub async fn set_content(&self, message_id: u64, content: &str) -> Result<(), DbErr> {
        entity::prelude::DiscordMessage::update_many()
            .col_expr(
                entity::discord_message::Column::Content,
                Expr::value(content.to_string()),
            )
            .filter(entity::discord_message::Column::Id.eq(message_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a message; the comment mirroring it cascades.
    pub async fn delete(&self, message_id: u64) -> Result<(), DbErr> {
        entity::prelude::DiscordMessage::delete_by_id(message_id.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
