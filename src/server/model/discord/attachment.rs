use sea_orm::DbErr;

use crate::server::util::parse::parse_snowflake;

/// The row an attachment belongs to.
///
/// Starter message attachments belong to the thread; all others to their message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentOwner {
    Message(u64),
    Thread(u64),
}

/// An attachment of a Discord message.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentSnapshot {
    pub attachment_id: u64,
    pub filename: String,
    pub content_type: Option<String>,
    pub size: u64,
    /// Discord CDN URL.
    pub url: String,
}

/// A stored attachment and the object key of its re-hosted copy.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredAttachmentParam {
    pub attachment_id: u64,
    pub object_key: String,
}

impl StoredAttachmentParam {
    pub fn from_entity(entity: entity::discord_message_attachment::Model) -> Result<Self, DbErr> {
        Ok(Self {
            attachment_id: parse_snowflake(&entity.id, "attachment_id")?,
            object_key: entity.object_key,
        })
    }
}
