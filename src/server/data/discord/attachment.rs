use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QuerySelect,
};

use crate::server::model::discord::{AttachmentOwner, AttachmentSnapshot, StoredAttachmentParam};

pub struct DiscordAttachmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiscordAttachmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_owner(
        &self,
        owner: AttachmentOwner,
    ) -> Result<Vec<StoredAttachmentParam>, DbErr> {
        let filter = match owner {
            AttachmentOwner::Message(message_id) => {
                entity::discord_message_attachment::Column::MessageId.eq(message_id.to_string())
            }
            AttachmentOwner::Thread(thread_id) => {
                entity::discord_message_attachment::Column::ThreadId.eq(thread_id.to_string())
            }
        };

        entity::prelude::DiscordMessageAttachment::find()
            .filter(filter)
            .all(self.db)
            .await?
            .into_iter()
            .map(StoredAttachmentParam::from_entity)
            .collect()
    }

    /// Gets the attachments of a thread's starter message and of all its messages.
    pub async fn find_by_thread_including_messages(
        &self,
        thread_id: u64,
    ) -> Result<Vec<StoredAttachmentParam>, DbErr> {
        let message_ids = entity::prelude::DiscordMessage::find()
            .select_only()
            .column(entity::discord_message::Column::Id)
            .filter(entity::discord_message::Column::ThreadId.eq(thread_id.to_string()))
            .into_tuple::<String>()
            .all(self.db)
            .await?;

        let mut condition = Condition::any()
            .add(entity::discord_message_attachment::Column::ThreadId.eq(thread_id.to_string()));
        if !message_ids.is_empty() {
            condition =
                condition.add(entity::discord_message_attachment::Column::MessageId.is_in(message_ids));
        }

        entity::prelude::DiscordMessageAttachment::find()
            .filter(condition)
            .all(self.db)
            .await?
            .into_iter()
            .map(StoredAttachmentParam::from_entity)
            .collect()
    }

    /// Records an attachment whose file was re-hosted under `object_key`.
    pub async fn create(
        &self,
        owner: AttachmentOwner,
        attachment: &AttachmentSnapshot,
        object_key: &str,
    ) -> Result<(), DbErr> {
        let (message_id, thread_id) = match owner {
            AttachmentOwner::Message(id) => (Some(id.to_string()), None),
            AttachmentOwner::Thread(id) => (None, Some(id.to_string())),
        };

        entity::discord_message_attachment::ActiveModel {
            id: ActiveValue::Set(attachment.attachment_id.to_string()),
            message_id: ActiveValue::Set(message_id),
            thread_id: ActiveValue::Set(thread_id),
            name: ActiveValue::Set(attachment.filename.clone()),
            content_type: ActiveValue::Set(attachment.content_type.clone()),
            size: ActiveValue::Set(attachment.size as i64),
            url: ActiveValue::Set(attachment.url.clone()),
            object_key: ActiveValue::Set(object_key.to_string()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, attachment_id: u64) -> Result<(), DbErr> {
        entity::prelude::DiscordMessageAttachment::delete_by_id(attachment_id.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
