//! Post factory for creating forum posts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{FeedbackStatus, PostType, QuestionStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts.
///
/// Defaults to a question awaiting an admin response with no author, which is how a
/// post mirrored from Discord looks.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    community_id: i32,
    author_id: Option<i32>,
    title: String,
    content: String,
    post_type: PostType,
    question_status: Option<QuestionStatus>,
    feedback_status: Option<FeedbackStatus>,
    discord_thread_id: Option<String>,
}

impl<'a> PostFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, community_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            community_id,
            author_id: None,
            title: format!("Post {}", id),
            content: format!("Post content {}", id),
            post_type: PostType::Question,
            question_status: Some(QuestionStatus::AwaitingAdminResponse),
            feedback_status: None,
            discord_thread_id: None,
        }
    }

    pub fn author_id(mut self, author_id: Option<i32>) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn post_type(mut self, post_type: PostType) -> Self {
        self.post_type = post_type;
        self
    }

    pub fn question_status(mut self, status: Option<QuestionStatus>) -> Self {
        self.question_status = status;
        self
    }

    pub fn feedback_status(mut self, status: Option<FeedbackStatus>) -> Self {
        self.feedback_status = status;
        self
    }

    pub fn discord_thread_id(mut self, thread_id: Option<String>) -> Self {
        self.discord_thread_id = thread_id;
        self
    }

    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();
        entity::post::ActiveModel {
            community_id: ActiveValue::Set(self.community_id),
            author_id: ActiveValue::Set(self.author_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            post_type: ActiveValue::Set(self.post_type),
            question_status: ActiveValue::Set(self.question_status),
            feedback_status: ActiveValue::Set(self.feedback_status),
            private: ActiveValue::Set(false),
            discord_thread_id: ActiveValue::Set(self.discord_thread_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_post(
    db: &DatabaseConnection,
    community_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, community_id).build().await
}
