//! Discord guild factory for creating test guild entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test Discord guilds linked to a community.
///
/// # Example
///
/// ```rust,ignore
/// let guild = DiscordGuildFactory::new(&db, community.id)
///     .id("987654321")
///     .name("CustomGuild")
///     .build()
///     .await?;
/// ```
pub struct DiscordGuildFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    icon: Option<String>,
    community_id: i32,
    last_sync_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl<'a> DiscordGuildFactory<'a> {
    /// Creates a new DiscordGuildFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented snowflake
    /// - name: `"Guild {id}"`
    /// - icon, last_sync_at: `None`
    pub fn new(db: &'a DatabaseConnection, community_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            name: format!("Guild {}", id),
            icon: None,
            community_id,
            last_sync_at: None,
        }
    }

    /// Sets the guild ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the guild name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the icon URL.
    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon;
        self
    }

    /// Sets the time of the last full sync.
    pub fn last_sync_at(mut self, last_sync_at: Option<chrono::DateTime<chrono::Utc>>) -> Self {
        self.last_sync_at = last_sync_at;
        self
    }

    /// Builds and inserts the guild entity into the database.
    pub async fn build(self) -> Result<entity::discord_guild::Model, DbErr> {
        entity::discord_guild::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            icon: ActiveValue::Set(self.icon),
            community_id: ActiveValue::Set(self.community_id),
            last_sync_at: ActiveValue::Set(self.last_sync_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Discord guild with default values linked to `community_id`.
pub async fn create_guild(
    db: &DatabaseConnection,
    community_id: i32,
) -> Result<entity::discord_guild::Model, DbErr> {
    DiscordGuildFactory::new(db, community_id).build().await
}
