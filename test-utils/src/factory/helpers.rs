//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating entities together with
//! the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values are used both for unique names and for snowflake-style Discord ids, so they are
/// always valid `u64` decimal strings once formatted.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// A community linked to a Discord guild that has one forum channel.
pub struct LinkedChannel {
    pub community: entity::community::Model,
    pub guild: entity::discord_guild::Model,
    pub channel: entity::discord_channel::Model,
}

/// A Discord thread mirrored into a post, with its full dependency chain.
pub struct MirroredThread {
    pub community: entity::community::Model,
    pub guild: entity::discord_guild::Model,
    pub channel: entity::discord_channel::Model,
    pub author: entity::discord_user::Model,
    pub thread: entity::discord_thread::Model,
    pub post: entity::post::Model,
}

/// Creates a community and links a Discord guild to it.
///
/// # Returns
/// - `Ok((community, guild))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_linked_community(
    db: &DatabaseConnection,
) -> Result<(entity::community::Model, entity::discord_guild::Model), DbErr> {
    let community = crate::factory::community::create_community(db).await?;
    let guild = crate::factory::discord_guild::create_guild(db, community.id).await?;

    Ok((community, guild))
}

/// Creates a linked community with a forum channel that has syncing enabled.
///
/// # Returns
/// - `Ok(LinkedChannel)` - Created community, guild and channel
/// - `Err(DbErr)` - Database error during creation
pub async fn create_linked_channel(db: &DatabaseConnection) -> Result<LinkedChannel, DbErr> {
    let (community, guild) = create_linked_community(db).await?;
    let channel = crate::factory::discord_channel::create_channel(db, &guild.id).await?;

    Ok(LinkedChannel {
        community,
        guild,
        channel,
    })
}

/// Creates a Discord thread in a synced forum channel and the post mirroring it.
///
/// The post is a question awaiting an admin response with no web author.
///
/// # Returns
/// - `Ok(MirroredThread)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_mirrored_thread(db: &DatabaseConnection) -> Result<MirroredThread, DbErr> {
    let LinkedChannel {
        community,
        guild,
        channel,
    } = create_linked_channel(db).await?;
    let author = crate::factory::discord_user::create_discord_user(db).await?;
    let thread = crate::factory::discord_thread::create_thread(db, &channel.id, &author.id).await?;
    let post = crate::factory::post::PostFactory::new(db, community.id)
        .title(thread.title.clone())
        .content(thread.starter_message_content.clone())
        .discord_thread_id(Some(thread.id.clone()))
        .build()
        .await?;

    Ok(MirroredThread {
        community,
        guild,
        channel,
        author,
        thread,
        post,
    })
}
