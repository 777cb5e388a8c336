use async_trait::async_trait;

use crate::server::{
    error::AppError,
    model::discord::{
        DiscordUserParam, ForumChannelSnapshot, GuildSnapshot, MessageSnapshot, ThreadSnapshot,
    },
};

/// The slice of the Discord API the mirroring services rely on.
///
/// Implemented over Serenity's HTTP client by the bot; tests substitute an in-memory
/// fake. Every lookup that can legitimately miss (a channel that is not a forum, a thread
/// outside a forum) returns `Ok(None)` rather than an error.
#[async_trait]
pub trait DiscordGateway: Send + Sync {
    async fn guild(&self, guild_id: u64) -> Result<GuildSnapshot, AppError>;

    /// Gets every forum channel of a guild.
    async fn forum_channels(&self, guild_id: u64) -> Result<Vec<ForumChannelSnapshot>, AppError>;

    /// Gets a channel if it is a forum channel.
    async fn forum_channel(&self, channel_id: u64)
        -> Result<Option<ForumChannelSnapshot>, AppError>;

    /// Gets the id of the forum channel a thread belongs to.
    ///
    /// `None` when the channel is not a thread or its parent is not a forum.
    async fn forum_parent_id(&self, guild_id: u64, channel_id: u64)
        -> Result<Option<u64>, AppError>;

    /// Gets one page of guild members, ordered by user id, after the `after` cursor.
    async fn guild_members(
        &self,
        guild_id: u64,
        after: Option<u64>,
        limit: u64,
    ) -> Result<Vec<DiscordUserParam>, AppError>;

    /// Gets a forum thread with its parent channel and starter message.
    ///
    /// `None` when the channel is not a thread inside a forum channel.
    async fn forum_thread(&self, thread_id: u64) -> Result<Option<ThreadSnapshot>, AppError>;

    /// Gets the ids of the active and the most recent archived threads of a forum channel.
    async fn forum_thread_ids(&self, guild_id: u64, channel_id: u64)
        -> Result<Vec<u64>, AppError>;

    /// Gets one page of a thread's messages, newest first, before the `before` cursor.
    ///
    /// Messages fetched this way carry no guild or forum channel; callers fill them in
    /// from the thread.
    async fn thread_messages(
        &self,
        thread_id: u64,
        before: Option<u64>,
        limit: u8,
    ) -> Result<Vec<MessageSnapshot>, AppError>;

    /// Posts a message as the bot, optionally as a reply.
    async fn send_thread_message(
        &self,
        thread_id: u64,
        content: &str,
        reply_to: Option<u64>,
    ) -> Result<MessageSnapshot, AppError>;

    /// Edits a message posted by the bot and returns the stored content.
    async fn edit_thread_message(
        &self,
        thread_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<String, AppError>;

    async fn delete_thread_message(&self, thread_id: u64, message_id: u64)
        -> Result<(), AppError>;

    /// Creates a permanent, unlimited, unique invite and returns its URL.
    async fn create_invite(&self, channel_id: u64) -> Result<String, AppError>;
}
