//! Gateway event handlers.
//!
//! Every handler turns its Serenity payload into snapshots and hands them to the
//! mirroring services. Handlers never fail: errors are reported through
//! [`capture_error`] with the name of the event that raised them.

use serenity::all::{
    ChannelId, Context, EventHandler, Guild, GuildChannel, GuildId, GuildMemberUpdateEvent,
    Interaction, Member, Message, MessageId, MessageUpdateEvent, PartialGuild,
    PartialGuildChannel, Ready,
};
use serenity::async_trait;

use crate::server::{error::AppError, service::discord::SyncContext};

pub mod channel;
pub mod guild;
pub mod interaction;
pub mod member;
pub mod message;
pub mod ready;
pub mod thread;

/// Discord bot event handler
pub struct Handler {
    pub sync: SyncContext,
}

impl Handler {
    pub fn new(sync: SyncContext) -> Self {
        Self { sync }
    }
}

/// Reports a handler error at `warn` when it is expected and `error` otherwise.
pub fn capture_error(event: &str, err: &AppError) {
    if err.is_critical() {
        tracing::error!("Error handling {}: {}", event, err);
    } else {
        tracing::warn!("Error handling {}: {}", event, err);
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.sync, ctx, interaction).await;
    }

    async fn guild_update(&self, _ctx: Context, _old: Option<Guild>, new: PartialGuild) {
        guild::handle_guild_update(&self.sync, new).await;
    }

    async fn guild_member_addition(&self, _ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.sync, new_member).await;
    }

    async fn guild_member_update(
        &self,
        _ctx: Context,
        _old: Option<Member>,
        _new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(&self.sync, event).await;
    }

    async fn channel_create(&self, _ctx: Context, channel: GuildChannel) {
        channel::handle_channel_create(&self.sync, channel).await;
    }

    async fn channel_update(&self, _ctx: Context, _old: Option<GuildChannel>, new: GuildChannel) {
        channel::handle_channel_update(&self.sync, new).await;
    }

    async fn channel_delete(
        &self,
        _ctx: Context,
        channel: GuildChannel,
        _messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(&self.sync, channel).await;
    }

    async fn thread_create(&self, _ctx: Context, thread: GuildChannel) {
        thread::handle_thread_create(&self.sync, thread).await;
    }

    async fn thread_update(&self, _ctx: Context, _old: Option<GuildChannel>, new: GuildChannel) {
        thread::handle_thread_update(&self.sync, new).await;
    }

    async fn thread_delete(
        &self,
        _ctx: Context,
        thread: PartialGuildChannel,
        _full_thread_data: Option<GuildChannel>,
    ) {
        thread::handle_thread_delete(&self.sync, thread).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, new_message: Message) {
        message::handle_message(&self.sync, ctx, new_message).await;
    }

    async fn message_update(
        &self,
        ctx: Context,
        _old_if_available: Option<Message>,
        new: Option<Message>,
        event: MessageUpdateEvent,
    ) {
        message::handle_message_update(&self.sync, ctx, new, event).await;
    }

    async fn message_delete(
        &self,
        _ctx: Context,
        _channel_id: ChannelId,
        deleted_message_id: MessageId,
        _guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete(&self.sync, deleted_message_id).await;
    }

    async fn message_delete_bulk(
        &self,
        _ctx: Context,
        _channel_id: ChannelId,
        multiple_deleted_messages_ids: Vec<MessageId>,
        _guild_id: Option<GuildId>,
    ) {
        for message_id in multiple_deleted_messages_ids {
            message::handle_message_delete(&self.sync, message_id).await;
        }
    }
}
