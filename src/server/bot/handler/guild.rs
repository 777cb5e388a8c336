use serenity::all::PartialGuild;

use crate::server::{
    bot::{convert, handler::capture_error},
    service::discord::{DiscordGuildService, SyncContext},
};

/// Refreshes the name and icon of a linked guild.
pub async fn handle_guild_update(sync: &SyncContext, guild: PartialGuild) {
    if let Err(e) = DiscordGuildService::new(sync)
        .update_guild(&convert::guild(&guild))
        .await
    {
        capture_error("guildUpdate", &e);
    }
}
