//! Full re-sync of a guild or a single forum channel.
//!
//! Gateway events keep the mirror current while the bot is online. A full sync catches
//! up on everything missed: it runs after `/connect`, on `/sync`, after a channel's
//! settings change and from the reconciliation job. Every write it performs is the same
//! idempotent upsert the event handlers use, so it is safe to run at any time.

use async_trait::async_trait;
use chrono::Utc;
use futures::{stream, StreamExt};

use crate::server::{
    data::discord::{DiscordChannelRepository, DiscordGuildRepository, DiscordUserRepository},
    error::{sync::SyncError, AppError},
    model::discord::GuildSnapshot,
    service::discord::{
        DiscordChannelService, DiscordGuildService, DiscordMessageService, DiscordThreadService,
        MessageSyncOutcome, SyncContext,
    },
};

/// Page size of guild member listing; Discord's maximum.
pub const MEMBER_PAGE_SIZE: u64 = 1000;
/// Page size of thread message history; Discord's maximum.
pub const MESSAGE_PAGE_SIZE: u8 = 100;
/// Threads of one channel synced at the same time.
pub const THREAD_CONCURRENCY: usize = 2;

const MAX_REPLY_CHARS: usize = 2000;
const MAX_LISTED_ERRORS: usize = 5;

/// Receives human readable status lines while a sync runs.
#[async_trait]
pub trait SyncProgress: Send + Sync {
    async fn report(&self, status: &str);
}

/// Discards progress; used by background syncs.
pub struct NoProgress;

#[async_trait]
impl SyncProgress for NoProgress {
    async fn report(&self, _status: &str) {}
}

/// Counts gathered by a sync. Errors of single threads and messages are collected
/// here rather than aborting the sync.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncSummary {
    pub forum_channels: usize,
    pub threads: u64,
    pub messages: u64,
    pub users: u64,
    pub errors: Vec<String>,
}

impl SyncSummary {
    fn absorb(&mut self, other: SyncSummary) {
        self.threads += other.threads;
        self.messages += other.messages;
        self.errors.extend(other.errors);
    }

    /// Renders the reply posted when `/sync` finishes.
    ///
    /// The body is cut to Discord's message limit before the settings link is appended.
    pub fn render(&self, app_url: &str, domain: &str) -> String {
        let mut reply = format!(
            "✅ Sync completed!\n\n📊 **Summary:**\n• Forum channels synced: {}\n• Threads processed: {}\n• Messages synced: {}\n• Users synced: {}",
            self.forum_channels, self.threads, self.messages, self.users
        );

        if !self.errors.is_empty() {
            let listed: Vec<String> = self
                .errors
                .iter()
                .take(MAX_LISTED_ERRORS)
                .map(|error| format!("• {}", error))
                .collect();
            reply.push_str("\n\n⚠️ **Errors encountered:**\n");
            reply.push_str(&listed.join("\n"));

            if self.errors.len() > MAX_LISTED_ERRORS {
                reply.push_str(&format!(
                    "\n... and {} more errors",
                    self.errors.len() - MAX_LISTED_ERRORS
                ));
            }
        }

        if reply.chars().count() > MAX_REPLY_CHARS {
            reply = reply.chars().take(MAX_REPLY_CHARS - 3).collect();
            reply.push_str("...");
        }

        reply.push_str(&format!(
            "\n\n🔗 [Manage Discord Integration]({}/s/{}/settings#discord)",
            app_url.trim_end_matches('/'),
            domain
        ));

        reply
    }
}

pub struct Synchronizer<'a> {
    ctx: &'a SyncContext,
}

impl<'a> Synchronizer<'a> {
    pub fn new(ctx: &'a SyncContext) -> Self {
        Self { ctx }
    }

    /// Re-syncs a linked guild: the guild itself, its forum channels, its members and
    /// every thread of every synced channel.
    ///
    /// Stamps the guild's `last_sync_at` once done.
    ///
    /// # Returns
    /// - `Ok(SyncSummary)` - Counts and the errors of individual channels, threads and messages
    /// - `Err(AppError::SyncErr(CommunityNotLinked))` - The guild is not linked
    /// - `Err(AppError)` - Listing channels or members failed
    pub async fn sync_guild(
        &self,
        guild: &GuildSnapshot,
        progress: &dyn SyncProgress,
    ) -> Result<SyncSummary, AppError> {
        let guild_service = DiscordGuildService::new(self.ctx);
        let community = guild_service.require_linked(guild.guild_id).await?;

        progress.report("🔍 Fetching guilds...").await;
        guild_service.update_guild(guild).await?;

        progress.report("🔍 Fetching forum channels...").await;
        let forum_channels = self.ctx.gateway.forum_channels(guild.guild_id).await?;

        progress
            .report(&format!(
                "📁 Found {} forum channels. Syncing channels...",
                forum_channels.len()
            ))
            .await;
        let channel_service = DiscordChannelService::new(self.ctx);
        for channel in &forum_channels {
            channel_service.upsert_forum_channel(channel).await?;
        }

        let mut summary = SyncSummary {
            forum_channels: forum_channels.len(),
            ..Default::default()
        };

        progress.report("👥 Syncing users...").await;
        summary.users = self.sync_members(guild.guild_id, progress).await?;

        for channel in &forum_channels {
            match self.sync_channel(channel.channel_id, progress).await {
                Ok(channel_summary) => summary.absorb(channel_summary),
                Err(e) => summary.errors.push(format!(
                    "Failed to process forum channel {}: {}",
                    channel.channel_id, e
                )),
            }
        }

        progress.report("✅ Sync completed! Preparing summary...").await;

        DiscordGuildRepository::new(&self.ctx.db)
            .update_last_sync(guild.guild_id, Utc::now())
            .await?;

        tracing::info!(
            "Synced guild {} of community {}: {} threads, {} messages, {} users, {} errors",
            guild.guild_id,
            community.domain,
            summary.threads,
            summary.messages,
            summary.users,
            summary.errors.len()
        );

        Ok(summary)
    }

    /// Mirrors every member of a guild, paging with an `after` cursor until a short page.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of members mirrored
    /// - `Err(AppError)` - Discord or database error; earlier pages stay mirrored
    pub async fn sync_members(
        &self,
        guild_id: u64,
        progress: &dyn SyncProgress,
    ) -> Result<u64, AppError> {
        let user_repo = DiscordUserRepository::new(&self.ctx.db);
        let mut after = None;
        let mut total = 0;

        loop {
            let members = self
                .ctx
                .gateway
                .guild_members(guild_id, after, MEMBER_PAGE_SIZE)
                .await?;
            let fetched = members.len() as u64;

            for member in &members {
                user_repo.upsert(member).await?;
            }

            if let Some(last) = members.last() {
                after = Some(last.user_id);
                total += fetched;
                progress
                    .report(&format!("👥 Synced {} users...", total))
                    .await;
            }

            if fetched < MEMBER_PAGE_SIZE {
                break;
            }
        }

        Ok(total)
    }

    /// Re-syncs the active and recently archived threads of a forum channel.
    ///
    /// Does nothing when the channel has syncing disabled.
    ///
    /// # Returns
    /// - `Ok(SyncSummary)` - Thread and message counts with per-item errors
    /// - `Err(AppError::SyncErr(ChannelNotFound))` - The channel is not mirrored
    /// - `Err(AppError::SyncErr(ForumChannelUnavailable))` - Discord has no such forum channel
    pub async fn sync_channel(
        &self,
        channel_id: u64,
        progress: &dyn SyncProgress,
    ) -> Result<SyncSummary, AppError> {
        let channel = DiscordChannelRepository::new(&self.ctx.db)
            .find_by_id(channel_id)
            .await?
            .ok_or(SyncError::ChannelNotFound(channel_id))?;

        if !channel.should_sync {
            return Ok(SyncSummary::default());
        }

        let forum = self
            .ctx
            .gateway
            .forum_channel(channel_id)
            .await?
            .ok_or(SyncError::ForumChannelUnavailable(channel_id))?;

        progress
            .report(&format!("📝 Processing forum channel: {}...", forum.name))
            .await;

        let thread_ids = self
            .ctx
            .gateway
            .forum_thread_ids(forum.guild_id, channel_id)
            .await?;

        progress
            .report(&format!(
                "📝 Found {} threads in {}. Syncing threads and messages...",
                thread_ids.len(),
                forum.name
            ))
            .await;

        let results: Vec<(u64, Result<SyncSummary, AppError>)> = stream::iter(thread_ids)
            .map(|thread_id| async move { (thread_id, self.sync_thread(thread_id).await) })
            .buffer_unordered(THREAD_CONCURRENCY)
            .collect()
            .await;

        let mut summary = SyncSummary::default();
        for (thread_id, result) in results {
            match result {
                Ok(thread_summary) => summary.absorb(thread_summary),
                Err(e) if e.is_unknown_message() => {
                    tracing::debug!("Thread {} not found, skipping", thread_id);
                }
                Err(e) => summary
                    .errors
                    .push(format!("Failed to sync thread {}: {}", thread_id, e)),
            }
        }

        Ok(summary)
    }

    /// Re-syncs one thread and its whole message history, oldest message first.
    ///
    /// Messages are mirrored one at a time so a reply always finds the message it
    /// references already stored.
    pub async fn sync_thread(&self, thread_id: u64) -> Result<SyncSummary, AppError> {
        let thread = self
            .ctx
            .gateway
            .forum_thread(thread_id)
            .await?
            .ok_or(SyncError::ThreadNotSynced(thread_id))?;

        DiscordThreadService::new(self.ctx)
            .upsert_thread(&thread)
            .await?;

        let mut messages = Vec::new();
        let mut before = None;
        loop {
            let page = self
                .ctx
                .gateway
                .thread_messages(thread_id, before, MESSAGE_PAGE_SIZE)
                .await?;
            let fetched = page.len();

            before = page.last().map(|message| message.message_id);
            messages.extend(page);

            if fetched < usize::from(MESSAGE_PAGE_SIZE) {
                break;
            }
        }
        messages.sort_by_key(|message| message.created_at);

        let message_service = DiscordMessageService::new(self.ctx);
        let mut summary = SyncSummary {
            threads: 1,
            ..Default::default()
        };

        for mut message in messages {
            if message.is_thread_starter() {
                continue;
            }

            message.guild_id = Some(thread.guild_id);
            message.forum_channel_id = Some(thread.channel.channel_id);

            match message_service.upsert_message(&message).await {
                Ok(MessageSyncOutcome::Synced(_)) => summary.messages += 1,
                Ok(_) => {}
                Err(e) if e.is_unknown_message() => {
                    tracing::debug!("Message {} not found, skipping", message.message_id);
                }
                Err(e) => summary.errors.push(format!(
                    "Failed to sync message {}: {}",
                    message.message_id, e
                )),
            }
        }

        Ok(summary)
    }
}
