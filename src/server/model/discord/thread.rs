use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::server::{
    model::discord::{AttachmentSnapshot, DiscordUserParam, ForumChannelSnapshot},
    util::parse::parse_snowflake,
};

/// A mirrored forum thread.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordThreadParam {
    pub thread_id: u64,
    pub channel_id: u64,
    pub title: String,
    pub starter_message_id: u64,
    pub author_id: u64,
}

impl DiscordThreadParam {
    /// Converts an entity model to a param model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DiscordThreadParam)` - Successfully converted param model
    /// - `Err(DbErr::Custom)` - Failed to parse one of the stored snowflakes
    pub fn from_entity(entity: entity::discord_thread::Model) -> Result<Self, DbErr> {
        Ok(Self {
            thread_id: parse_snowflake(&entity.id, "thread_id")?,
            channel_id: parse_snowflake(&entity.channel_id, "channel_id")?,
            title: entity.title,
            starter_message_id: parse_snowflake(&entity.starter_message_id, "starter_message_id")?,
            author_id: parse_snowflake(&entity.author_id, "author_id")?,
        })
    }
}

/// The first message of a forum thread, which holds the post body.
#[derive(Debug, Clone, PartialEq)]
pub struct StarterMessageSnapshot {
    pub message_id: u64,
    pub author: DiscordUserParam,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
    pub attachments: Vec<AttachmentSnapshot>,
}

/// A forum thread as Discord reports it, with its parent forum and starter message.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadSnapshot {
    pub thread_id: u64,
    pub guild_id: u64,
    pub title: String,
    /// Forum tag ids applied to the thread.
    pub applied_tags: Vec<u64>,
    pub channel: ForumChannelSnapshot,
    pub starter: StarterMessageSnapshot,
}

/// Values written when mirroring a thread.
#[derive(Debug, Clone)]
pub struct UpsertThreadParam {
    pub thread_id: u64,
    pub channel_id: u64,
    pub title: String,
    pub starter_message_id: u64,
    pub starter_message_content: String,
    pub author_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
