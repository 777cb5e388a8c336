//! Channel event handlers.
//!
//! Only forum channels are mirrored. Created and updated forums are upserted together
//! with their tags; deleting a channel removes its mirror, and the threads, posts and
//! comments under it cascade.

use serenity::all::GuildChannel;

use crate::server::{
    bot::{convert, handler::capture_error},
    service::discord::{DiscordChannelService, SyncContext},
};

pub async fn handle_channel_create(sync: &SyncContext, channel: GuildChannel) {
    upsert_forum(sync, "channelCreate", &channel).await;
}

pub async fn handle_channel_update(sync: &SyncContext, channel: GuildChannel) {
    upsert_forum(sync, "channelUpdate", &channel).await;
}

pub async fn handle_channel_delete(sync: &SyncContext, channel: GuildChannel) {
    match DiscordChannelService::new(sync)
        .delete_channel(channel.id.get())
        .await
    {
        Ok(true) => tracing::info!("Deleted mirrored channel {}", channel.id),
        Ok(false) => {}
        Err(e) => capture_error("channelDelete", &e),
    }
}

async fn upsert_forum(sync: &SyncContext, event: &str, channel: &GuildChannel) {
    let Some(forum) = convert::forum_channel(channel) else {
        tracing::debug!(
            "Ignoring non-forum channel {} (type: {:?}) in guild {}",
            channel.name,
            channel.kind,
            channel.guild_id
        );
        return;
    };

    if let Err(e) = DiscordChannelService::new(sync)
        .upsert_forum_channel(&forum)
        .await
    {
        capture_error(event, &e);
    }
}
