use sea_orm::DbErr;

use crate::server::util::parse::parse_snowflake;

/// A Discord account seen in a linked guild.
///
/// Used both for upserts from gateway data and for stored rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordUserParam {
    pub user_id: u64,
    pub username: String,
    /// Legacy four digit discriminator, absent for migrated usernames.
    pub discriminator: Option<String>,
    /// Avatar URL, falling back to Discord's default avatar.
    pub avatar: Option<String>,
}

impl DiscordUserParam {
    pub fn from_entity(entity: entity::discord_user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            user_id: parse_snowflake(&entity.id, "discord_user_id")?,
            username: entity.username,
            discriminator: entity.discriminator,
            avatar: entity.avatar,
        })
    }
}
