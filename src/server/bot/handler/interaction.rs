use serenity::all::{Context, Interaction};

use crate::server::{
    bot::{command, handler::capture_error},
    service::discord::SyncContext,
};

/// Runs slash commands; other interactions are ignored.
pub async fn handle_interaction_create(sync: &SyncContext, ctx: Context, interaction: Interaction) {
    let Interaction::Command(slash) = interaction else {
        return;
    };

    if let Err(e) = command::dispatch(sync, &ctx.http, &slash).await {
        capture_error(&format!("/{}", slash.data.name), &e);
        command::reply_error(&ctx.http, &slash, &e).await;
    }
}
