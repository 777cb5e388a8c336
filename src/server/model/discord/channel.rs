use entity::sea_orm_active_enums::PostType;
use sea_orm::DbErr;

use crate::{
    model::discord::{DiscordChannelDto, UpdateDiscordChannelDto},
    server::util::parse::parse_snowflake,
};

/// A mirrored forum channel together with its sync settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordChannelParam {
    pub channel_id: u64,
    pub guild_id: u64,
    pub name: String,
    /// Raw Discord channel type.
    pub kind: i32,
    /// Whether threads of this channel are mirrored into posts.
    pub should_sync: bool,
    /// Type given to posts mirrored from this channel.
    pub default_post_type: PostType,
    /// Tag applied to every post mirrored from this channel.
    pub default_post_tag_id: Option<i32>,
    pub invite_link: Option<String>,
}

impl DiscordChannelParam {
    /// Converts an entity model to a param model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DiscordChannelParam)` - Successfully converted param model
    /// - `Err(DbErr::Custom)` - Failed to parse id or guild_id as u64
    pub fn from_entity(entity: entity::discord_channel::Model) -> Result<Self, DbErr> {
        Ok(Self {
            channel_id: parse_snowflake(&entity.id, "channel_id")?,
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            name: entity.name,
            kind: entity.kind,
            should_sync: entity.should_sync,
            default_post_type: entity.default_post_type,
            default_post_tag_id: entity.default_post_tag_id,
            invite_link: entity.invite_link,
        })
    }

    /// Converts the channel and its mirrored thread count to a DTO for API responses.
    pub fn into_dto(self, thread_count: u64) -> DiscordChannelDto {
        DiscordChannelDto {
            id: self.channel_id.to_string(),
            name: self.name,
            should_sync: self.should_sync,
            default_post_type: self.default_post_type.into(),
            default_post_tag_id: self.default_post_tag_id,
            invite_link: self.invite_link,
            thread_count,
        }
    }
}

/// A tag members can apply to threads of a forum channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ForumTagSnapshot {
    pub tag_id: u64,
    pub name: String,
}

/// A forum channel as Discord reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct ForumChannelSnapshot {
    pub channel_id: u64,
    pub guild_id: u64,
    pub name: String,
    pub kind: i32,
    pub available_tags: Vec<ForumTagSnapshot>,
}

/// Admin-controlled sync settings, replaced as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateChannelSettingsParam {
    pub should_sync: bool,
    pub default_post_type: PostType,
    pub default_post_tag_id: Option<i32>,
}

impl UpdateChannelSettingsParam {
    pub fn from_dto(dto: UpdateDiscordChannelDto) -> Self {
        Self {
            should_sync: dto.should_sync,
            default_post_type: dto.default_post_type.into(),
            default_post_tag_id: dto.default_post_tag_id,
        }
    }
}
