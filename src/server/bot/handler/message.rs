use serenity::all::{
    ChannelId, ChannelType, Context, Guild, Message, MessageId, MessageUpdateEvent,
};

use crate::server::{
    bot::{convert, handler::capture_error},
    data::discord::DiscordGuildRepository,
    error::AppError,
    service::discord::{DiscordMessageService, SyncContext},
};

/// Handle message creation in a channel
pub async fn handle_message(sync: &SyncContext, ctx: Context, message: Message) {
    if let Err(e) = upsert_message(sync, &ctx, &message).await {
        capture_error("messageCreate", &e);
    }
}

/// Handles edits. The gateway only carries the full message when it is cached;
/// otherwise it is fetched.
pub async fn handle_message_update(
    sync: &SyncContext,
    ctx: Context,
    new: Option<Message>,
    event: MessageUpdateEvent,
) {
    let result = async {
        let message = match new {
            Some(message) => message,
            None => ctx.http.get_message(event.channel_id, event.id).await?,
        };

        upsert_message(sync, &ctx, &message).await
    }
    .await;

    if let Err(e) = result {
        capture_error("messageUpdate", &e);
    }
}

pub async fn handle_message_delete(sync: &SyncContext, message_id: MessageId) {
    if let Err(e) = DiscordMessageService::new(sync)
        .delete_message(message_id.get())
        .await
    {
        capture_error("messageDelete", &e);
    }
}

async fn upsert_message(
    sync: &SyncContext,
    ctx: &Context,
    message: &Message,
) -> Result<(), AppError> {
    // Only messages in guild channels are mirrored
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };
    if message.author.id.get() == sync.bot_user_id || convert::is_system_message(message) {
        return Ok(());
    }

    if DiscordGuildRepository::new(&sync.db)
        .find_by_id(guild_id.get())
        .await?
        .is_none()
    {
        return Ok(());
    }

    let cached = ctx
        .cache
        .guild(guild_id)
        .and_then(|guild| cached_forum_parent(&guild, message.channel_id));
    let forum_channel_id = match cached {
        Some(parent) => parent,
        None => {
            sync.gateway
                .forum_parent_id(guild_id.get(), message.channel_id.get())
                .await?
        }
    };
    if forum_channel_id.is_none() {
        return Ok(());
    }

    DiscordMessageService::new(sync)
        .upsert_message(&convert::message(message, forum_channel_id))
        .await?;

    Ok(())
}

/// Resolves the forum a message's channel belongs to from a cached guild.
///
/// # Returns
/// - `Some(Some(forum_id))` - The channel is a thread of a cached forum channel
/// - `Some(None)` - The channel is cached and is not a forum thread
/// - `None` - The cache cannot tell; the channel or the thread's parent is missing
pub fn cached_forum_parent(guild: &Guild, channel_id: ChannelId) -> Option<Option<u64>> {
    let Some(thread) = guild.threads.iter().find(|thread| thread.id == channel_id) else {
        return guild.channels.contains_key(&channel_id).then_some(None);
    };

    let parent_id = thread.parent_id?;
    let parent = guild.channels.get(&parent_id)?;

    Some((parent.kind == ChannelType::Forum).then_some(parent_id.get()))
}
