use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::server::util::parse::parse_snowflake;

/// A Discord guild linked to a community.
///
/// The existence of the row is what links the two; unlinking deletes it.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuildParam {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Guild display name.
    pub name: String,
    /// Optional guild icon hash.
    pub icon: Option<String>,
    pub community_id: i32,
    /// Timestamp of the last completed full sync, if any.
    pub last_sync_at: Option<DateTime<Utc>>,
}

impl DiscordGuildParam {
    /// Converts an entity model to a param model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DiscordGuildParam)` - Successfully converted param model
    /// - `Err(DbErr::Custom)` - Failed to parse id as u64
    pub fn from_entity(entity: entity::discord_guild::Model) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: parse_snowflake(&entity.id, "guild_id")?,
            name: entity.name,
            icon: entity.icon,
            community_id: entity.community_id,
            last_sync_at: entity.last_sync_at,
        })
    }
}

/// The display properties of a guild as Discord reports them.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSnapshot {
    pub guild_id: u64,
    pub name: String,
    pub icon: Option<String>,
}
