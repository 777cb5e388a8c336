use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::discord::{DiscordThreadParam, UpsertThreadParam};

pub struct DiscordThreadRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiscordThreadRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn upsert(&self, param: UpsertThreadParam) -> Result<DiscordThreadParam, DbErr> {
        let entity = entity::prelude::DiscordThread::insert(entity::discord_thread::ActiveModel {
            id: ActiveValue::Set(param.thread_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            title: ActiveValue::Set(param.title),
            starter_message_id: ActiveValue::Set(param.starter_message_id.to_string()),
            starter_message_content: ActiveValue::Set(param.starter_message_content),
            author_id: ActiveValue::Set(param.author_id.to_string()),
            created_at: ActiveValue::Set(param.created_at),
            updated_at: ActiveValue::Set(param.updated_at),
        })
        .on_conflict(
            OnConflict::column(entity::discord_thread::Column::Id)
                .update_columns([
                    entity::discord_thread::Column::ChannelId,
                    entity::discord_thread::Column::Title,
                    entity::discord_thread::Column::StarterMessageId,
                    entity::discord_thread::Column::StarterMessageContent,
                    entity::discord_thread::Column::AuthorId,
                    entity::discord_thread::Column::CreatedAt,
                    entity::discord_thread::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        DiscordThreadParam::from_entity(entity)
    }

    pub async fn find_by_id(&self, thread_id: u64) -> Result<Option<DiscordThreadParam>, DbErr> {
        entity::prelude::DiscordThread::find_by_id(thread_id.to_string())
            .one(self.db)
            .await?
            .map(DiscordThreadParam::from_entity)
            .transpose()
    }

    /// Deletes a thread; its post, messages, comments and attachments cascade.
    pub async fn delete(&self, thread_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::DiscordThread::delete_by_id(thread_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
