use thiserror::Error;

/// Failures of the Discord mirroring pipeline.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The guild has no linked community.
    ///
    /// Non-critical: most guilds the bot sees until an admin runs `/connect`.
    #[error("This Discord server is not linked to a Paladin community. Use /connect to link one.")]
    CommunityNotLinked,

    /// The forum channel has no mirrored row yet.
    #[error("Discord channel {0} is not mirrored")]
    ChannelNotFound(u64),

    /// The thread (or its post) is still missing after waiting and a direct fetch.
    #[error("Thread {0} or its post could not be synced")]
    ThreadNotSynced(u64),

    /// Discord did not return the thread's starter message.
    #[error("Starter message for thread {0} not found")]
    StarterMessageMissing(u64),

    /// The channel is not a forum channel reachable by the bot.
    #[error("Forum channel {0} not found")]
    ForumChannelUnavailable(u64),
}
