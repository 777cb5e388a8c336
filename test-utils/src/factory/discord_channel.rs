//! Discord channel factory for creating forum channel rows.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::PostType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Discord's channel type number for forum channels.
pub const FORUM_CHANNEL_KIND: i32 = 15;

/// Factory for creating test Discord forum channels.
///
/// Unlike the database default, channels built here have syncing enabled since most
/// tests exercise the mirroring path.
pub struct DiscordChannelFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    guild_id: String,
    name: String,
    should_sync: bool,
    default_post_type: PostType,
    default_post_tag_id: Option<i32>,
    invite_link: Option<String>,
}

impl<'a> DiscordChannelFactory<'a> {
    /// Creates a new DiscordChannelFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented snowflake
    /// - name: `"forum-{id}"`
    /// - should_sync: `true`
    /// - default_post_type: `QUESTION`
    pub fn new(db: &'a DatabaseConnection, guild_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            guild_id: guild_id.to_string(),
            name: format!("forum-{}", id),
            should_sync: true,
            default_post_type: PostType::Question,
            default_post_tag_id: None,
            invite_link: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn should_sync(mut self, should_sync: bool) -> Self {
        self.should_sync = should_sync;
        self
    }

    pub fn default_post_type(mut self, post_type: PostType) -> Self {
        self.default_post_type = post_type;
        self
    }

    pub fn default_post_tag_id(mut self, tag_id: Option<i32>) -> Self {
        self.default_post_tag_id = tag_id;
        self
    }

    pub fn invite_link(mut self, invite_link: Option<String>) -> Self {
        self.invite_link = invite_link;
        self
    }

    /// Builds and inserts the channel entity into the database.
    pub async fn build(self) -> Result<entity::discord_channel::Model, DbErr> {
        entity::discord_channel::ActiveModel {
            id: ActiveValue::Set(self.id),
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            kind: ActiveValue::Set(FORUM_CHANNEL_KIND),
            should_sync: ActiveValue::Set(self.should_sync),
            default_post_type: ActiveValue::Set(self.default_post_type),
            default_post_tag_id: ActiveValue::Set(self.default_post_tag_id),
            invite_link: ActiveValue::Set(self.invite_link),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a synced forum channel with default values in `guild_id`.
pub async fn create_channel(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::discord_channel::Model, DbErr> {
    DiscordChannelFactory::new(db, guild_id).build().await
}
