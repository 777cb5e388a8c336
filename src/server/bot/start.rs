use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents, Http};

use crate::server::{
    bot::{gateway::SerenityGateway, handler::Handler},
    config::Config,
    error::AppError,
    service::{discord::SyncContext, notification::Notifier},
    storage::AttachmentStorage,
};

/// Initializes the Discord bot client and the sync context shared with the rest of the server.
///
/// The bot's own user id is looked up first so the mirroring services can recognise
/// (and skip) the bot's messages.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token and app URL
/// - `db` - Database connection for the mirroring services
/// - `storage` - Object storage attachments are re-hosted to
/// - `notifier` - Delivery of comment and admin notifications
///
/// # Returns
/// - `Ok((Client, SyncContext))` - Client ready to start and the shared context
/// - `Err(AppError)` - Invalid token or failed to build the client
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    storage: Arc<dyn AttachmentStorage>,
    notifier: Arc<dyn Notifier>,
) -> Result<(Client, SyncContext), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let http = Arc::new(Http::new(&config.discord_bot_token));
    let bot_user = http.get_current_user().await?;

    let sync = SyncContext::new(
        db,
        Arc::new(SerenityGateway::new(http)),
        storage,
        notifier,
        bot_user.id.get(),
        config.app_url.clone(),
    );

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(sync.clone()))
        .await?;

    Ok((client, sync))
}

/// Starts the Discord bot in a blocking manner
///
/// This function should be called from within a tokio::spawn task since it will block
/// until the bot shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
