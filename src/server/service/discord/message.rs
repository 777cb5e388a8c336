use entity::sea_orm_active_enums::{PostType, QuestionStatus};

use crate::server::{
    data::{
        comment::CommentRepository,
        discord::{DiscordChannelRepository, DiscordMessageRepository, DiscordUserRepository},
        post::PostRepository,
    },
    error::{sync::SyncError, AppError},
    model::{
        comment::{CommentParam, UpsertMirroredCommentParam, DELETED_COMMENT_CONTENT},
        discord::{
            AttachmentOwner, MessageSnapshot, UpsertMessageParam, DELETED_MESSAGE_CONTENT,
        },
    },
    service::{
        discord::{
            AttachmentService, DiscordGuildService, DiscordThreadService, MentionNormalizer,
            MirroredThread, SyncContext,
        },
        notification::NotificationService,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum MessageSyncOutcome {
    /// Not a message of a synced forum thread, or sent by the bot itself.
    Skipped,
    /// The thread's starter message; mirrored into the post instead of a comment.
    StarterMessage,
    Synced(CommentParam),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDeleteOutcome {
    /// The message was never mirrored.
    Ignored,
    /// Replies reference the message, so its content was replaced instead.
    SoftDeleted,
    Deleted,
}

pub struct DiscordMessageService<'a> {
    ctx: &'a SyncContext,
}

impl<'a> DiscordMessageService<'a> {
    pub fn new(ctx: &'a SyncContext) -> Self {
        Self { ctx }
    }

    /// Mirrors a forum thread message into a comment on the thread's post.
    ///
    /// A reply from the thread author to a question awaiting their response moves the
    /// question back to awaiting an admin response and notifies the admins. Watchers of
    /// the post are notified of every mirrored message.
    ///
    /// # Returns
    /// - `Ok(MessageSyncOutcome::Synced)` - The created or updated comment
    /// - `Ok(MessageSyncOutcome::StarterMessage)` - The post was refreshed from the thread
    /// - `Ok(MessageSyncOutcome::Skipped)` - Nothing to mirror
    /// - `Err(AppError::SyncErr(_))` - Unlinked guild, unmirrored channel or thread
    pub async fn upsert_message(&self, message: &MessageSnapshot) -> Result<MessageSyncOutcome, AppError> {
        let (Some(guild_id), Some(forum_channel_id)) = (message.guild_id, message.forum_channel_id)
        else {
            return Ok(MessageSyncOutcome::Skipped);
        };

        if message.is_system || message.author.user_id == self.ctx.bot_user_id {
            return Ok(MessageSyncOutcome::Skipped);
        }

        let thread_service = DiscordThreadService::new(self.ctx);

        if message.is_thread_starter() {
            let Some(thread) = self.ctx.gateway.forum_thread(message.channel_id).await? else {
                return Ok(MessageSyncOutcome::Skipped);
            };
            thread_service.upsert_thread(&thread).await?;

            return Ok(MessageSyncOutcome::StarterMessage);
        }

        let db = &self.ctx.db;
        DiscordGuildService::new(self.ctx)
            .require_linked(guild_id)
            .await?;

        let channel = DiscordChannelRepository::new(db)
            .find_by_id(forum_channel_id)
            .await?
            .ok_or(SyncError::ChannelNotFound(forum_channel_id))?;
        if !channel.should_sync {
            return Ok(MessageSyncOutcome::Skipped);
        }

        DiscordUserRepository::new(db).upsert(&message.author).await?;

        let MirroredThread { thread, mut post } =
            thread_service.require_thread(message.channel_id).await?;

        let notification_service = NotificationService::new(db, self.ctx.notifier.as_ref());

        if post.post_type == PostType::Question
            && post.question_status == Some(QuestionStatus::AwaitingUserResponse)
            && message.author.user_id == thread.author_id
        {
            PostRepository::new(db)
                .set_question_status(post.id, QuestionStatus::AwaitingAdminResponse)
                .await?;
            post.question_status = Some(QuestionStatus::AwaitingAdminResponse);

            notification_service.notify_admins(&post).await?;
        }

        let parent_message_id = self.reply_parent(message, thread.starter_message_id).await?;
        let content = MentionNormalizer::new(db).normalize(&message.content).await;

        DiscordMessageRepository::new(db)
            .upsert(UpsertMessageParam {
                message_id: message.message_id,
                thread_id: thread.thread_id,
                content: content.clone(),
                author_id: message.author.user_id,
                parent_id: parent_message_id,
                created_at: message.created_at,
                updated_at: message.updated_at(),
            })
            .await?;

        AttachmentService::new(db, self.ctx.storage.as_ref())
            .reconcile(AttachmentOwner::Message(message.message_id), &message.attachments)
            .await?;

        let comment_repo = CommentRepository::new(db);
        let parent_comment_id = match parent_message_id {
            Some(parent_message_id) => comment_repo
                .find_by_discord_message_id(parent_message_id)
                .await?
                .map(|comment| comment.id),
            None => None,
        };

        let comment = comment_repo
            .upsert_mirrored(UpsertMirroredCommentParam {
                post_id: post.id,
                discord_message_id: message.message_id,
                parent_id: parent_comment_id,
                content,
                created_at: message.created_at,
                updated_at: message.updated_at(),
            })
            .await?;

        notification_service
            .notify_watchers(&post, &comment, None)
            .await?;

        Ok(MessageSyncOutcome::Synced(comment))
    }

    /// The mirrored message a reply points at, if the reference is worth keeping.
    ///
    /// References to system messages, to the thread starter (the post itself), to bot
    /// messages with no comment behind them and to messages that were never mirrored
    /// are dropped.
    async fn reply_parent(
        &self,
        message: &MessageSnapshot,
        starter_message_id: u64,
    ) -> Result<Option<u64>, AppError> {
        let Some(reference) = &message.reference else {
            return Ok(None);
        };

        if reference.is_system
            || reference.message_id == starter_message_id
            || reference.message_id == message.channel_id
        {
            return Ok(None);
        }

        if reference.author_id == self.ctx.bot_user_id
            && CommentRepository::new(&self.ctx.db)
                .find_by_discord_message_id(reference.message_id)
                .await?
                .is_none()
        {
            return Ok(None);
        }

        let stored = DiscordMessageRepository::new(&self.ctx.db)
            .exists(reference.message_id)
            .await?;

        Ok(stored.then_some(reference.message_id))
    }

    /// Removes a mirrored message.
    ///
    /// A message other messages reply to keeps its row so the reply chain survives;
    /// its content and its comment's content are replaced with a deletion notice.
    pub async fn delete_message(&self, message_id: u64) -> Result<MessageDeleteOutcome, AppError> {
        let db = &self.ctx.db;
        let message_repo = DiscordMessageRepository::new(db);

        if !message_repo.exists(message_id).await? {
            return Ok(MessageDeleteOutcome::Ignored);
        }

        if message_repo.count_replies(message_id).await? > 0 {
            message_repo
                .set_content(message_id, DELETED_MESSAGE_CONTENT)
                .await?;

            let comment_repo = CommentRepository::new(db);
            if let Some(comment) = comment_repo.find_by_discord_message_id(message_id).await? {
                comment_repo
                    .update_content(comment.id, DELETED_COMMENT_CONTENT.to_string())
                    .await?;
            }

            return Ok(MessageDeleteOutcome::SoftDeleted);
        }

        AttachmentService::new(db, self.ctx.storage.as_ref())
            .remove_owner_objects(AttachmentOwner::Message(message_id))
            .await?;
        message_repo.delete(message_id).await?;

        Ok(MessageDeleteOutcome::Deleted)
    }
}
