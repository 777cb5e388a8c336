//! Test fixture for creating Serenity Attachment objects.

use serenity::all::Attachment;

/// Creates a test Serenity Attachment hosted on Discord's CDN.
///
/// # Arguments
/// - `attachment_id` - Discord attachment ID (snowflake)
/// - `filename` - File name as uploaded, extension included when present
/// - `content_type` - Optional MIME type reported by Discord
/// - `size` - Size in bytes
///
/// # Panics
/// - If the JSON cannot be deserialized into an Attachment (indicates invalid test data)
pub fn create_test_attachment(
    attachment_id: u64,
    filename: &str,
    content_type: Option<&str>,
    size: u32,
) -> Attachment {
    let url = format!(
        "https://cdn.discordapp.com/attachments/1/{}/{}",
        attachment_id, filename
    );

    serde_json::from_value(serde_json::json!({
        "id": attachment_id.to_string(),
        "filename": filename,
        "size": size,
        "url": url,
        "proxy_url": url,
        "height": null,
        "width": null,
        "content_type": content_type,
    }))
    .expect("Failed to create test attachment - invalid JSON structure")
}
