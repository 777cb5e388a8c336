use serenity::all::{CommandInteraction, Http};

use crate::server::{
    bot::command::{edit_reply, string_option, ReplyProgress},
    error::AppError,
    service::discord::{ConnectOutcome, DiscordGuildService, SyncContext, Synchronizer},
};

/// `/connect community_domain secret_key`: links the guild, then mirrors it.
pub async fn run(sync: &SyncContext, http: &Http, command: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = command
        .guild_id
        .ok_or_else(|| AppError::BadRequest("This command can only be used in a server".to_string()))?;
    let options = &command.data.options;
    let (Some(domain), Some(secret_key)) = (
        string_option(options, "community_domain"),
        string_option(options, "secret_key"),
    ) else {
        return Err(AppError::BadRequest(
            "Both community_domain and secret_key are required".to_string(),
        ));
    };

    let guild = sync.gateway.guild(guild_id.get()).await?;
    let outcome = DiscordGuildService::new(sync)
        .connect(domain, secret_key, &guild)
        .await?;

    let community = match outcome {
        ConnectOutcome::Linked(community) => community,
        rejected => {
            let reply = rejected.rejection().unwrap_or_default();
            return edit_reply(http, command, &reply).await;
        }
    };

    edit_reply(
        http,
        command,
        &format!("🔗 Linked to {}. Syncing forum channels...", community.domain),
    )
    .await?;

    let summary = Synchronizer::new(sync)
        .sync_guild(&guild, &ReplyProgress::new(http, command))
        .await?;

    edit_reply(http, command, &summary.render(&sync.app_url, &community.domain)).await
}
