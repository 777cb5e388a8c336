//! Comment factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    author_id: Option<i32>,
    parent_id: Option<i32>,
    content: String,
    discord_message_id: Option<String>,
    is_accepted_answer: bool,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, post_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            post_id,
            author_id: None,
            parent_id: None,
            content: format!("Comment {}", id),
            discord_message_id: None,
            is_accepted_answer: false,
        }
    }

    pub fn author_id(mut self, author_id: Option<i32>) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn parent_id(mut self, parent_id: Option<i32>) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn discord_message_id(mut self, message_id: Option<String>) -> Self {
        self.discord_message_id = message_id;
        self
    }

    pub fn accepted(mut self, accepted: bool) -> Self {
        self.is_accepted_answer = accepted;
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            post_id: ActiveValue::Set(self.post_id),
            author_id: ActiveValue::Set(self.author_id),
            parent_id: ActiveValue::Set(self.parent_id),
            content: ActiveValue::Set(self.content),
            discord_message_id: ActiveValue::Set(self.discord_message_id),
            is_accepted_answer: ActiveValue::Set(self.is_accepted_answer),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id).build().await
}
