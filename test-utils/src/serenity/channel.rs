//! Test fixtures for creating Serenity GuildChannel objects.

use serenity::all::{ChannelType, GuildChannel};

/// Creates a guild channel or thread of the given type.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Guild the channel belongs to
/// - `kind` - Channel type; threads use `PublicThread`
/// - `parent_id` - Parent channel of a thread, or category of a channel
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    kind: ChannelType,
    parent_id: Option<u64>,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": u8::from(kind),
        "name": format!("channel-{}", channel_id),
        "parent_id": parent_id.map(|id| id.to_string()),
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
