//! Slash commands.
//!
//! `/connect` links the guild to a community and `/sync` re-mirrors it. Both answer
//! ephemerally: the dispatcher defers the reply, the command edits it as it goes, and a
//! failure is shown in the same reply.

pub mod connect;
pub mod sync;

use async_trait::async_trait;
use serenity::all::{
    CommandDataOption, CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption,
    EditInteractionResponse, Http,
};

use crate::server::{
    error::AppError,
    service::discord::{SyncContext, SyncProgress},
};

pub const CONNECT: &str = "connect";
pub const SYNC: &str = "sync";

const SUPPORT_POINTER: &str = "Please reach out to Paladin support at community.trypaladin.com.";

/// Global command definitions, registered when the bot connects.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(CONNECT)
            .description("Link this Discord server to your Paladin community")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "community_domain",
                    "The domain of your Paladin community",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "secret_key",
                    "The secret key shown in your community's Discord settings",
                )
                .required(true),
            ),
        CreateCommand::new(SYNC).description("Re-sync this Discord server's forum channels with Paladin"),
    ]
}

/// Runs a slash command against its deferred reply.
pub async fn dispatch(sync: &SyncContext, http: &Http, command: &CommandInteraction) -> Result<(), AppError> {
    command.defer_ephemeral(http).await?;

    match command.data.name.as_str() {
        CONNECT => connect::run(sync, http, command).await,
        SYNC => sync::run(sync, http, command).await,
        other => Err(AppError::BadRequest(format!("Unknown command {}", other))),
    }
}

/// Replaces the deferred reply of a failed command with the error.
pub async fn reply_error(http: &Http, command: &CommandInteraction, err: &AppError) {
    let reply = EditInteractionResponse::new().content(error_reply(&err.to_string()));

    if let Err(e) = command.edit_response(http, reply).await {
        tracing::warn!("Failed to report error of /{}: {}", command.data.name, e);
    }
}

pub fn error_reply(message: &str) -> String {
    format!("\nError: {}\n\n{}", message, SUPPORT_POINTER)
}

async fn edit_reply(http: &Http, command: &CommandInteraction, content: &str) -> Result<(), AppError> {
    command
        .edit_response(http, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}

pub fn string_option<'a>(options: &'a [CommandDataOption], name: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
}

/// Shows sync progress in the command's reply.
pub struct ReplyProgress<'a> {
    http: &'a Http,
    command: &'a CommandInteraction,
}

impl<'a> ReplyProgress<'a> {
    pub fn new(http: &'a Http, command: &'a CommandInteraction) -> Self {
        Self { http, command }
    }
}

#[async_trait]
impl SyncProgress for ReplyProgress<'_> {
    async fn report(&self, status: &str) {
        if let Err(e) = edit_reply(self.http, self.command, status).await {
            tracing::warn!("Failed to report sync progress: {}", e);
        }
    }
}
