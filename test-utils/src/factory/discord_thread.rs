//! Discord thread factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating mirrored Discord thread rows.
///
/// The starter message id equals the thread id, as it does for forum posts.
pub struct DiscordThreadFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    channel_id: String,
    author_id: String,
    title: String,
    starter_message_content: String,
    created_at: DateTime<Utc>,
}

impl<'a> DiscordThreadFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, channel_id: &str, author_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            channel_id: channel_id.to_string(),
            author_id: author_id.to_string(),
            title: format!("Thread {}", id),
            starter_message_content: format!("Starter message {}", id),
            created_at: Utc::now(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn starter_message_content(mut self, content: impl Into<String>) -> Self {
        self.starter_message_content = content.into();
        self
    }

    pub async fn build(self) -> Result<entity::discord_thread::Model, DbErr> {
        entity::discord_thread::ActiveModel {
            starter_message_id: ActiveValue::Set(self.id.clone()),
            id: ActiveValue::Set(self.id),
            channel_id: ActiveValue::Set(self.channel_id),
            title: ActiveValue::Set(self.title),
            starter_message_content: ActiveValue::Set(self.starter_message_content),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_thread(
    db: &DatabaseConnection,
    channel_id: &str,
    author_id: &str,
) -> Result<entity::discord_thread::Model, DbErr> {
    DiscordThreadFactory::new(db, channel_id, author_id)
        .build()
        .await
}
