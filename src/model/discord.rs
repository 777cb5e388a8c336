use entity::sea_orm_active_enums::PostType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Post type a forum channel assigns to mirrored threads.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostTypeDto {
    Question,
    Feedback,
    General,
}

impl From<PostType> for PostTypeDto {
    fn from(value: PostType) -> Self {
        match value {
            PostType::Question => Self::Question,
            PostType::Feedback => Self::Feedback,
            PostType::General => Self::General,
        }
    }
}

impl From<PostTypeDto> for PostType {
    fn from(value: PostTypeDto) -> Self {
        match value {
            PostTypeDto::Question => Self::Question,
            PostTypeDto::Feedback => Self::Feedback,
            PostTypeDto::General => Self::General,
        }
    }
}

/// A mirrored forum channel with its sync settings.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DiscordChannelDto {
    /// Discord channel snowflake as a string.
    pub id: String,
    pub name: String,
    pub should_sync: bool,
    pub default_post_type: PostTypeDto,
    pub default_post_tag_id: Option<i32>,
    pub invite_link: Option<String>,
    /// Number of mirrored threads in the channel.
    pub thread_count: u64,
}

/// Replaces the sync settings of a forum channel.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UpdateDiscordChannelDto {
    pub should_sync: bool,
    pub default_post_type: PostTypeDto,
    pub default_post_tag_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct InviteLinkDto {
    pub invite_link: Option<String>,
}
