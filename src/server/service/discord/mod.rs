//! Discord to database mirroring.
//!
//! Every service here works against a [`SyncContext`], which bundles the database pool
//! with the outside world: the Discord API behind [`DiscordGateway`], attachment object
//! storage and notification delivery. The bot's event handlers, the `/connect` and `/sync`
//! commands, the HTTP routes and the reconciliation job all share one context.
//!
//! Gateway events arrive out of order (a reply can be delivered before the thread it
//! belongs to has been written), so every write is an idempotent upsert keyed by the
//! Discord snowflake, and message mirroring waits for its thread with exponential backoff.

pub mod attachment;
pub mod channel;
pub mod gateway;
pub mod guild;
pub mod mention;
pub mod message;
pub mod sync;
pub mod thread;
pub mod user;

#[cfg(test)]
pub mod fake;

use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

pub use attachment::AttachmentService;
pub use channel::DiscordChannelService;
pub use gateway::DiscordGateway;
pub use guild::{simple_hash, ConnectOutcome, DiscordGuildService};
pub use mention::MentionNormalizer;
pub use message::{DiscordMessageService, MessageDeleteOutcome, MessageSyncOutcome};
pub use sync::{NoProgress, SyncProgress, SyncSummary, Synchronizer};
pub use thread::{DiscordThreadService, MirroredThread};
pub use user::DiscordUserService;

use crate::server::{service::notification::Notifier, storage::AttachmentStorage};

/// Exponential backoff: attempt `n` waits `base_delay * 2^n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    pub attempts: u32,
    pub base_delay: Duration,
}

impl Backoff {
    pub const fn new(attempts: u32, base_delay: Duration) -> Self {
        Self {
            attempts,
            base_delay,
        }
    }

    pub fn delay(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// 100, 200, 400, 800 and 1600 ms.
impl Default for Backoff {
    fn default() -> Self {
        Self::new(5, Duration::from_millis(100))
    }
}

/// Shared dependencies of the mirroring services.
///
/// Cheap to clone; background tasks take their own copy.
#[derive(Clone)]
pub struct SyncContext {
    pub db: DatabaseConnection,
    pub gateway: Arc<dyn DiscordGateway>,
    pub storage: Arc<dyn AttachmentStorage>,
    pub notifier: Arc<dyn Notifier>,
    /// The bot's own user id; its messages are never mirrored as comments.
    pub bot_user_id: u64,
    /// Base URL of the web app, used in links posted to Discord.
    pub app_url: String,
    /// How long message mirroring waits for a thread written by a concurrent event.
    pub thread_backoff: Backoff,
}

impl SyncContext {
    pub fn new(
        db: DatabaseConnection,
        gateway: Arc<dyn DiscordGateway>,
        storage: Arc<dyn AttachmentStorage>,
        notifier: Arc<dyn Notifier>,
        bot_user_id: u64,
        app_url: String,
    ) -> Self {
        Self {
            db,
            gateway,
            storage,
            notifier,
            bot_user_id,
            app_url,
            thread_backoff: Backoff::default(),
        }
    }

    pub fn with_thread_backoff(mut self, backoff: Backoff) -> Self {
        self.thread_backoff = backoff;
        self
    }
}
