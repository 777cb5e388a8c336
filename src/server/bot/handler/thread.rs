use serenity::all::{GuildChannel, PartialGuildChannel};

use crate::server::{
    bot::handler::capture_error,
    error::{sync::SyncError, AppError},
    service::discord::{DiscordThreadService, SyncContext},
};

pub async fn handle_thread_create(sync: &SyncContext, thread: GuildChannel) {
    upsert_thread(sync, "threadCreate", thread.id.get()).await;
}

/// Renames and tag changes arrive as thread updates.
pub async fn handle_thread_update(sync: &SyncContext, thread: GuildChannel) {
    upsert_thread(sync, "threadUpdate", thread.id.get()).await;
}

pub async fn handle_thread_delete(sync: &SyncContext, thread: PartialGuildChannel) {
    if let Err(e) = DiscordThreadService::new(sync)
        .delete_thread(thread.id.get())
        .await
    {
        capture_error("threadDelete", &e);
    }
}

/// Fetches the thread with its forum and starter message and mirrors it.
///
/// Non-forum threads are ignored. Discord may announce a new thread before its starter
/// message exists; the starter's own message event mirrors the thread then.
async fn upsert_thread(sync: &SyncContext, event: &str, thread_id: u64) {
    let result = async {
        let Some(thread) = sync.gateway.forum_thread(thread_id).await? else {
            return Ok(());
        };
        DiscordThreadService::new(sync).upsert_thread(&thread).await?;

        Ok::<(), AppError>(())
    }
    .await;

    match result {
        Ok(()) => {}
        Err(AppError::SyncErr(SyncError::StarterMessageMissing(_))) => {
            tracing::debug!("Thread {} has no starter message yet", thread_id);
        }
        Err(e) => capture_error(event, &e),
    }
}
