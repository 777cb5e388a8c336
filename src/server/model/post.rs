//! Post models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{FeedbackStatus, PostType, QuestionStatus};
use sea_orm::DbErr;

use crate::server::util::parse::parse_optional_snowflake;

/// A forum post, possibly mirrored from a Discord thread.
#[derive(Debug, Clone, PartialEq)]
pub struct PostParam {
    pub id: i32,
    pub community_id: i32,
    /// `None` when the post was mirrored from Discord.
    pub author_id: Option<i32>,
    pub title: String,
    pub post_type: PostType,
    pub question_status: Option<QuestionStatus>,
    pub feedback_status: Option<FeedbackStatus>,
    /// Discord thread the post mirrors.
    pub discord_thread_id: Option<u64>,
}

impl PostParam {
    /// Converts an entity model to a param model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(PostParam)` - Successfully converted param model
    /// - `Err(DbErr::Custom)` - Failed to parse discord_thread_id as u64
    pub fn from_entity(entity: entity::post::Model) -> Result<Self, DbErr> {
        let discord_thread_id =
            parse_optional_snowflake(entity.discord_thread_id.as_deref(), "discord_thread_id")?;

        Ok(Self {
            id: entity.id,
            community_id: entity.community_id,
            author_id: entity.author_id,
            title: entity.title,
            post_type: entity.post_type,
            question_status: entity.question_status,
            feedback_status: entity.feedback_status,
            discord_thread_id,
        })
    }

    /// Whether `user_id` wrote the post on the web.
    pub fn is_authored_by(&self, user_id: i32) -> bool {
        self.author_id == Some(user_id)
    }
}

/// Statuses applied to a post of a given type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostStatuses {
    pub question_status: Option<QuestionStatus>,
    pub feedback_status: Option<FeedbackStatus>,
}

impl PostStatuses {
    /// Initial statuses for a new post of `post_type`.
    pub fn initial(post_type: PostType) -> Self {
        Self {
            question_status: (post_type == PostType::Question)
                .then_some(QuestionStatus::AwaitingAdminResponse),
            feedback_status: (post_type == PostType::Feedback)
                .then_some(FeedbackStatus::UnderReview),
        }
    }
}

/// Values written when mirroring a Discord thread into its post.
#[derive(Debug, Clone)]
pub struct UpsertMirroredPostParam {
    pub community_id: i32,
    pub discord_thread_id: u64,
    pub title: String,
    pub content: String,
    pub post_type: PostType,
    pub statuses: PostStatuses,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
