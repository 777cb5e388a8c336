//! Comment models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::comment::{CommentDto, CreateCommentDto},
    server::util::parse::parse_optional_snowflake,
};

/// Content written over a comment removed while replies still reference it.
pub const DELETED_COMMENT_CONTENT: &str = "*This comment has been deleted*";

#[derive(Debug, Clone, PartialEq)]
pub struct CommentParam {
    pub id: i32,
    pub post_id: i32,
    /// `None` when the comment was mirrored from a Discord message.
    pub author_id: Option<i32>,
    pub parent_id: Option<i32>,
    pub content: String,
    pub discord_message_id: Option<u64>,
    pub is_accepted_answer: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CommentParam {
    /// Converts an entity model to a param model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(CommentParam)` - Successfully converted param model
    /// - `Err(DbErr::Custom)` - Failed to parse discord_message_id as u64
    pub fn from_entity(entity: entity::comment::Model) -> Result<Self, DbErr> {
        let discord_message_id =
            parse_optional_snowflake(entity.discord_message_id.as_deref(), "discord_message_id")?;

        Ok(Self {
            id: entity.id,
            post_id: entity.post_id,
            author_id: entity.author_id,
            parent_id: entity.parent_id,
            content: entity.content,
            discord_message_id,
            is_accepted_answer: entity.is_accepted_answer,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            post_id: self.post_id,
            author_id: self.author_id,
            parent_id: self.parent_id,
            content: self.content,
            is_accepted_answer: self.is_accepted_answer,
            discord_message_id: self.discord_message_id.map(|id| id.to_string()),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Whether `user_id` wrote the comment on the web.
    pub fn is_authored_by(&self, user_id: i32) -> bool {
        self.author_id == Some(user_id)
    }
}

/// A comment written on the web.
#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub post_id: i32,
    pub author_id: i32,
    pub parent_id: Option<i32>,
    pub content: String,
    /// Bot message mirroring the comment into the post's thread.
    pub discord_message_id: Option<u64>,
}

/// A comment mirrored from a Discord message, keyed by the message id.
#[derive(Debug, Clone)]
pub struct UpsertMirroredCommentParam {
    pub post_id: i32,
    pub discord_message_id: u64,
    pub parent_id: Option<i32>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment submitted through the web app.
#[derive(Debug, Clone)]
pub struct NewCommentParam {
    pub post_id: i32,
    pub content: String,
    pub parent_id: Option<i32>,
}

impl NewCommentParam {
    pub fn from_dto(dto: CreateCommentDto) -> Self {
        Self {
            post_id: dto.post_id,
            content: dto.content,
            parent_id: dto.parent_id,
        }
    }
}
