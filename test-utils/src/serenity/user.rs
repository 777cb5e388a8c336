//! Test fixture for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User.
///
/// The user has no avatar, the modern `"0"` discriminator and no global name.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `bot` - Whether the account is a bot
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str, bot: bool) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
        "system": false,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}

/// Creates a test Serenity User carrying an avatar hash.
///
/// The hash is padded to Discord's 32 character format.
pub fn create_test_user_with_avatar(user_id: u64, username: &str, avatar_hash: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": format!("{:0<32}", avatar_hash),
        "bot": false,
        "system": false,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
