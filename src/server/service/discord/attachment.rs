use std::{collections::HashSet, path::Path};

use sea_orm::ConnectionTrait;

use crate::server::{
    data::discord::DiscordAttachmentRepository,
    error::AppError,
    model::discord::{AttachmentOwner, AttachmentSnapshot, StoredAttachmentParam},
    storage::AttachmentStorage,
};

/// Prefix of every re-hosted attachment object.
pub const ATTACHMENT_KEY_PREFIX: &str = "discord/attachments";

/// Keeps stored attachments and their re-hosted copies in step with Discord.
pub struct AttachmentService<'a, C: ConnectionTrait> {
    db: &'a C,
    storage: &'a dyn AttachmentStorage,
}

impl<'a, C: ConnectionTrait> AttachmentService<'a, C> {
    pub fn new(db: &'a C, storage: &'a dyn AttachmentStorage) -> Self {
        Self { db, storage }
    }

    /// Makes the stored attachments of `owner` match `attachments`.
    ///
    /// Attachments no longer present are removed from storage and the database. New
    /// ones are copied from Discord's CDN; a failed copy is logged and the attachment
    /// left out, to be retried on the next edit or sync.
    pub async fn reconcile(
        &self,
        owner: AttachmentOwner,
        attachments: &[AttachmentSnapshot],
    ) -> Result<(), AppError> {
        let attachment_repo = DiscordAttachmentRepository::new(self.db);
        let stored = attachment_repo.find_by_owner(owner).await?;

        let current: HashSet<u64> = attachments.iter().map(|a| a.attachment_id).collect();
        let known: HashSet<u64> = stored.iter().map(|a| a.attachment_id).collect();

        for removed in stored.iter().filter(|a| !current.contains(&a.attachment_id)) {
            self.delete_object(removed).await;
            attachment_repo.delete(removed.attachment_id).await?;
        }

        for attachment in attachments
            .iter()
            .filter(|a| !known.contains(&a.attachment_id))
        {
            let key = attachment_key(attachment);

            if let Err(e) = self
                .storage
                .rehost(&attachment.url, &key, attachment.content_type.as_deref())
                .await
            {
                tracing::error!(
                    "Skipping attachment {} ({}): {}",
                    attachment.attachment_id,
                    attachment.filename,
                    e
                );
                continue;
            }

            attachment_repo.create(owner, attachment, &key).await?;
        }

        Ok(())
    }

    /// Removes the stored objects of a message's attachments; rows go with the message.
    pub async fn remove_owner_objects(&self, owner: AttachmentOwner) -> Result<(), AppError> {
        let stored = DiscordAttachmentRepository::new(self.db)
            .find_by_owner(owner)
            .await?;

        for attachment in &stored {
            self.delete_object(attachment).await;
        }

        Ok(())
    }

    /// Removes the stored objects of a thread's starter and of all its messages.
    pub async fn remove_thread_objects(&self, thread_id: u64) -> Result<(), AppError> {
        let stored = DiscordAttachmentRepository::new(self.db)
            .find_by_thread_including_messages(thread_id)
            .await?;

        for attachment in &stored {
            self.delete_object(attachment).await;
        }

        Ok(())
    }

    async fn delete_object(&self, attachment: &StoredAttachmentParam) {
        if let Err(e) = self.storage.delete(&attachment.object_key).await {
            tracing::warn!(
                "Failed to delete stored attachment {}: {}",
                attachment.attachment_id,
                e
            );
        }
    }
}

/// Object key of a re-hosted attachment: `discord/attachments/{id}{ext}`.
pub fn attachment_key(attachment: &AttachmentSnapshot) -> String {
    format!(
        "{}/{}{}",
        ATTACHMENT_KEY_PREFIX,
        attachment.attachment_id,
        attachment_extension(&attachment.filename, attachment.content_type.as_deref())
    )
}

/// File extension with its leading dot, from the filename or else the MIME type.
///
/// Empty when neither yields one.
pub fn attachment_extension(filename: &str, content_type: Option<&str>) -> String {
    if let Some(extension) = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
    {
        return format!(".{}", extension);
    }

    content_type
        .and_then(|mime| mime.split(';').next())
        .map(str::trim)
        .and_then(mime_guess::get_mime_extensions_str)
        .and_then(|extensions| extensions.first())
        .map(|extension| format!(".{}", extension))
        .unwrap_or_default()
}
