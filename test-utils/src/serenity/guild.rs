//! Test fixtures for creating Serenity Guild objects as the gateway cache holds them.

use serenity::all::{Guild, GuildChannel};
use serde_json::Value;

/// Creates a cached guild with the given channels and active threads.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `channels` - Guild channels, forums included
/// - `threads` - Active threads
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(
    guild_id: u64,
    name: &str,
    channels: &[GuildChannel],
    threads: &[GuildChannel],
) -> Guild {
    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2025-03-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": to_values(channels),
        "threads": to_values(threads),
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}

fn to_values(channels: &[GuildChannel]) -> Vec<Value> {
    channels
        .iter()
        .map(|channel| serde_json::to_value(channel).expect("Failed to serialize test channel"))
        .collect()
}
