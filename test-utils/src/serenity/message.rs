//! Test fixtures for creating Serenity Message objects.
//!
//! `create_test_message` covers plain guild messages; `MessageBuilder` adds the
//! variations mirroring cares about: replies, attachments, system kinds, edits and
//! direct messages.

use serenity::all::{Attachment, Message, User};
use serde_json::{json, Value};

/// Guild ID used by messages built without an explicit guild.
pub const TEST_GUILD_ID: u64 = 900_000_000_000_000_001;

/// Creates a plain guild text message with a fixed creation timestamp.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel (thread) the message was sent in
/// - `author` - Message author
/// - `content` - Raw message content
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(message_id: u64, channel_id: u64, author: &User, content: &str) -> Message {
    MessageBuilder::new(message_id, channel_id, author)
        .content(content)
        .build()
}

/// Builder for Serenity messages with optional reply, attachments and kind.
pub struct MessageBuilder {
    message_id: u64,
    channel_id: u64,
    author: Value,
    content: String,
    guild_id: Option<u64>,
    kind: u8,
    timestamp: String,
    edited_timestamp: Option<String>,
    attachments: Vec<Attachment>,
    referenced: Option<Message>,
}

impl MessageBuilder {
    pub fn new(message_id: u64, channel_id: u64, author: &User) -> Self {
        Self {
            message_id,
            channel_id,
            author: serde_json::to_value(author).expect("Failed to serialize test user"),
            content: String::new(),
            guild_id: Some(TEST_GUILD_ID),
            kind: 0,
            timestamp: "2025-03-01T12:00:00.000000+00:00".to_string(),
            edited_timestamp: None,
            attachments: Vec::new(),
            referenced: None,
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// Sets the guild; `None` produces a direct message.
    pub fn guild_id(mut self, guild_id: Option<u64>) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the raw Discord message type (0 = default, 19 = reply, 18 = thread created).
    pub fn kind(mut self, kind: u8) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the creation timestamp (RFC 3339).
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn edited_timestamp(mut self, timestamp: &str) -> Self {
        self.edited_timestamp = Some(timestamp.to_string());
        self
    }

    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Makes the message a reply to `referenced`.
    pub fn reply_to(mut self, referenced: Message) -> Self {
        self.kind = 19;
        self.referenced = Some(referenced);
        self
    }

    pub fn build(self) -> Message {
        let message_reference = self.referenced.as_ref().map(|referenced| {
            json!({
                "message_id": referenced.id.to_string(),
                "channel_id": referenced.channel_id.to_string(),
                "guild_id": self.guild_id.map(|id| id.to_string()),
            })
        });
        let referenced_message = self
            .referenced
            .as_ref()
            .map(|referenced| serde_json::to_value(referenced).expect("Failed to serialize test message"));

        serde_json::from_value(json!({
            "id": self.message_id.to_string(),
            "channel_id": self.channel_id.to_string(),
            "guild_id": self.guild_id.map(|id| id.to_string()),
            "author": self.author,
            "content": self.content,
            "timestamp": self.timestamp,
            "edited_timestamp": self.edited_timestamp,
            "tts": false,
            "mention_everyone": false,
            "mentions": [],
            "mention_roles": [],
            "mention_channels": [],
            "attachments": self.attachments,
            "embeds": [],
            "reactions": [],
            "pinned": false,
            "type": self.kind,
            "flags": 0,
            "components": [],
            "sticker_items": [],
            "message_reference": message_reference,
            "referenced_message": referenced_message,
        }))
        .expect("Failed to create test message - invalid JSON structure")
    }
}
