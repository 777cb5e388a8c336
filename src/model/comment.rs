use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateCommentDto {
    pub post_id: i32,
    pub content: String,
    /// Comment being replied to, which must belong to the same post.
    pub parent_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UpdateCommentDto {
    pub content: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MarkAcceptedDto {
    pub is_accepted_answer: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CommentDto {
    pub id: i32,
    pub post_id: i32,
    /// `None` for comments mirrored from Discord.
    pub author_id: Option<i32>,
    pub parent_id: Option<i32>,
    pub content: String,
    pub is_accepted_answer: bool,
    /// Discord message snowflake when the comment is mirrored.
    pub discord_message_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
