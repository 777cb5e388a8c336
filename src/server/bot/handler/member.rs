use serenity::all::{GuildMemberUpdateEvent, Member};

use crate::server::{
    bot::{convert, handler::capture_error},
    service::discord::{DiscordUserService, SyncContext},
};

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(sync: &SyncContext, member: Member) {
    if let Err(e) = DiscordUserService::new(sync)
        .upsert_member(member.guild_id.get(), &convert::discord_user(&member.user))
        .await
    {
        capture_error("guildMemberAdd", &e);
    }
}

/// Handles the guild_member_update event; usernames and avatars change here.
pub async fn handle_guild_member_update(sync: &SyncContext, event: GuildMemberUpdateEvent) {
    if let Err(e) = DiscordUserService::new(sync)
        .upsert_member(event.guild_id.get(), &convert::discord_user(&event.user))
        .await
    {
        capture_error("guildMemberUpdate", &e);
    }
}
