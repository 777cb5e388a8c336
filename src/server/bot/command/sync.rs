use serenity::all::{CommandInteraction, Http};

use crate::server::{
    bot::command::{edit_reply, ReplyProgress},
    error::AppError,
    service::discord::{DiscordGuildService, SyncContext, Synchronizer},
};

/// `/sync`: re-mirrors a linked guild, reporting progress in the reply.
pub async fn run(sync: &SyncContext, http: &Http, command: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = command
        .guild_id
        .ok_or_else(|| AppError::BadRequest("This command can only be used in a server".to_string()))?
        .get();

    let community = DiscordGuildService::new(sync).require_linked(guild_id).await?;
    edit_reply(http, command, "🔄 Starting sync...").await?;

    let guild = sync.gateway.guild(guild_id).await?;
    let summary = Synchronizer::new(sync)
        .sync_guild(&guild, &ReplyProgress::new(http, command))
        .await?;

    tracing::info!(
        "Synced guild {} for {}: {} threads, {} messages, {} errors",
        guild_id,
        community.domain,
        summary.threads,
        summary.messages,
        summary.errors.len()
    );

    edit_reply(http, command, &summary.render(&sync.app_url, &community.domain)).await
}
