use chrono::{DateTime, Utc};

use crate::server::model::discord::{AttachmentSnapshot, DiscordUserParam};

/// Content written over a Discord message removed while replies reference it.
pub const DELETED_MESSAGE_CONTENT: &str = "This comment has been deleted";

/// The message a reply points at.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageReferenceSnapshot {
    pub message_id: u64,
    pub author_id: u64,
    pub is_system: bool,
}

/// A Discord message as delivered by the gateway or fetched from a thread.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageSnapshot {
    pub message_id: u64,
    /// Channel the message was sent in; the thread for forum messages.
    pub channel_id: u64,
    /// `None` for direct messages.
    pub guild_id: Option<u64>,
    /// Forum channel owning the thread, `None` when the message is not in a forum thread.
    pub forum_channel_id: Option<u64>,
    pub author: DiscordUserParam,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
    pub is_system: bool,
    pub attachments: Vec<AttachmentSnapshot>,
    pub reference: Option<MessageReferenceSnapshot>,
}

impl MessageSnapshot {
    /// Forum starter messages share their id with the thread.
    pub fn is_thread_starter(&self) -> bool {
        self.message_id == self.channel_id
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.edited_at.unwrap_or(self.created_at)
    }
}

/// Values written when mirroring a message.
#[derive(Debug, Clone)]
pub struct UpsertMessageParam {
    pub message_id: u64,
    pub thread_id: u64,
    pub content: String,
    pub author_id: u64,
    pub parent_id: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
