//! Discord message factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct DiscordMessageFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    thread_id: String,
    author_id: String,
    content: String,
    parent_id: Option<String>,
}

impl<'a> DiscordMessageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, thread_id: &str, author_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            thread_id: thread_id.to_string(),
            author_id: author_id.to_string(),
            content: format!("Message {}", id),
            parent_id: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn parent_id(mut self, parent_id: Option<String>) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub async fn build(self) -> Result<entity::discord_message::Model, DbErr> {
        let now = Utc::now();
        entity::discord_message::ActiveModel {
            id: ActiveValue::Set(self.id),
            thread_id: ActiveValue::Set(self.thread_id),
            content: ActiveValue::Set(self.content),
            author_id: ActiveValue::Set(self.author_id),
            parent_id: ActiveValue::Set(self.parent_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_message(
    db: &DatabaseConnection,
    thread_id: &str,
    author_id: &str,
) -> Result<entity::discord_message::Model, DbErr> {
    DiscordMessageFactory::new(db, thread_id, author_id)
        .build()
        .await
}
