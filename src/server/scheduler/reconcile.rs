//! Periodic re-sync of linked guilds.
//!
//! Gateway events missed while the bot was offline leave the mirror behind. Every hour
//! this job fully re-syncs each linked guild whose last full sync is older than a day,
//! one guild at a time.

use chrono::{DateTime, Duration, Utc};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::discord::DiscordGuildRepository,
    error::AppError,
    service::discord::{NoProgress, SyncContext, Synchronizer},
};

/// A guild synced longer ago than this is re-synced.
const STALE_AFTER_HOURS: i64 = 24;

/// Starts the reconciliation scheduler
///
/// # Arguments
/// - `sync`: Mirroring context shared with the bot
pub async fn start_scheduler(sync: SyncContext) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let sync = sync.clone();

        Box::pin(async move {
            if let Err(e) = reconcile_stale_guilds(&sync, Utc::now()).await {
                tracing::error!("Error reconciling Discord guilds: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Discord reconciliation scheduler started");

    Ok(())
}

/// Re-syncs every guild that is stale at `now` and returns how many were synced.
///
/// A guild that fails to sync is logged and skipped; it stays stale and is retried on
/// the next run.
pub async fn reconcile_stale_guilds(sync: &SyncContext, now: DateTime<Utc>) -> Result<usize, AppError> {
    let stale = DiscordGuildRepository::new(&sync.db)
        .get_stale(now - Duration::hours(STALE_AFTER_HOURS))
        .await?;

    let mut synced = 0;
    for guild in stale {
        let result = async {
            let snapshot = sync.gateway.guild(guild.guild_id).await?;
            Synchronizer::new(sync)
                .sync_guild(&snapshot, &NoProgress)
                .await
        }
        .await;

        match result {
            Ok(summary) => {
                synced += 1;
                tracing::info!(
                    "Reconciled guild {}: {} threads, {} messages, {} errors",
                    guild.guild_id,
                    summary.threads,
                    summary.messages,
                    summary.errors.len()
                );
            }
            Err(e) => tracing::error!("Failed to reconcile guild {}: {}", guild.guild_id, e),
        }
    }

    Ok(synced)
}
