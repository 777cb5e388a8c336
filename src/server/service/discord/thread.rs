use sea_orm::TransactionTrait;

use crate::server::{
    data::{
        discord::{DiscordChannelRepository, DiscordThreadRepository, DiscordUserRepository},
        post::PostRepository,
        post_tag::PostTagRepository,
    },
    error::{sync::SyncError, AppError},
    model::{
        discord::{AttachmentOwner, DiscordThreadParam, ThreadSnapshot, UpsertThreadParam},
        post::{PostParam, PostStatuses, UpsertMirroredPostParam},
    },
    service::discord::{AttachmentService, DiscordGuildService, MentionNormalizer, SyncContext},
};

/// A mirrored thread together with the post it feeds.
#[derive(Debug, Clone, PartialEq)]
pub struct MirroredThread {
    pub thread: DiscordThreadParam,
    pub post: PostParam,
}

pub struct DiscordThreadService<'a> {
    ctx: &'a SyncContext,
}

impl<'a> DiscordThreadService<'a> {
    pub fn new(ctx: &'a SyncContext) -> Self {
        Self { ctx }
    }

    /// Mirrors a forum thread and its starter message into a post.
    ///
    /// The thread row and the post are written in one transaction. A new post, or one
    /// whose type no longer matches the channel default, gets the initial statuses of
    /// that type; otherwise the statuses admins and users have moved it to are kept.
    ///
    /// # Returns
    /// - `Ok(Some(PostParam))` - The created or updated post
    /// - `Ok(None)` - The thread's channel has syncing disabled
    /// - `Err(AppError::SyncErr(CommunityNotLinked))` - The guild is not linked
    /// - `Err(AppError::SyncErr(ChannelNotFound))` - The forum channel is not mirrored yet
    pub async fn upsert_thread(&self, thread: &ThreadSnapshot) -> Result<Option<PostParam>, AppError> {
        let db = &self.ctx.db;
        let community = DiscordGuildService::new(self.ctx)
            .require_linked(thread.guild_id)
            .await?;

        let starter = &thread.starter;
        DiscordUserRepository::new(db).upsert(&starter.author).await?;
        let content = MentionNormalizer::new(db).normalize(&starter.content).await;

        let tag_repo = PostTagRepository::new(db);
        for tag in &thread.channel.available_tags {
            tag_repo.upsert_discord_tag(community.id, tag).await?;
        }

        let channel = DiscordChannelRepository::new(db)
            .find_by_id(thread.channel.channel_id)
            .await?
            .ok_or(SyncError::ChannelNotFound(thread.channel.channel_id))?;

        if !channel.should_sync {
            return Ok(None);
        }

        let updated_at = starter.edited_at.unwrap_or(starter.created_at);

        let txn = db.begin().await?;

        let existing = PostRepository::new(&txn)
            .find_by_thread_id(thread.thread_id)
            .await?;
        let statuses = match existing {
            Some(post) if post.post_type == channel.default_post_type => PostStatuses {
                question_status: post.question_status,
                feedback_status: post.feedback_status,
            },
            _ => PostStatuses::initial(channel.default_post_type.clone()),
        };

        DiscordThreadRepository::new(&txn)
            .upsert(UpsertThreadParam {
                thread_id: thread.thread_id,
                channel_id: channel.channel_id,
                title: thread.title.clone(),
                starter_message_id: starter.message_id,
                starter_message_content: content.clone(),
                author_id: starter.author.user_id,
                created_at: starter.created_at,
                updated_at,
            })
            .await?;

        let post = PostRepository::new(&txn)
            .upsert_mirrored(UpsertMirroredPostParam {
                community_id: community.id,
                discord_thread_id: thread.thread_id,
                title: thread.title.clone(),
                content,
                post_type: channel.default_post_type.clone(),
                statuses,
                created_at: starter.created_at,
                updated_at,
            })
            .await?;

        txn.commit().await?;

        AttachmentService::new(db, self.ctx.storage.as_ref())
            .reconcile(AttachmentOwner::Thread(thread.thread_id), &starter.attachments)
            .await?;

        let mut tag_ids = tag_repo
            .find_ids_by_discord_tags(community.id, &thread.applied_tags)
            .await?;
        if let Some(default_tag_id) = channel.default_post_tag_id {
            if !tag_ids.contains(&default_tag_id) {
                tag_ids.push(default_tag_id);
            }
        }

        let txn = db.begin().await?;
        PostRepository::new(&txn).replace_tags(post.id, &tag_ids).await?;
        txn.commit().await?;

        tracing::debug!(
            "Mirrored thread {} into post {} of community {}",
            thread.thread_id,
            post.id,
            community.domain
        );

        Ok(Some(post))
    }

    /// Deletes a mirrored thread and the re-hosted files of it and its messages.
    ///
    /// # Returns
    /// - `Ok(true)` - The thread was deleted; its post, messages and comments cascade
    /// - `Ok(false)` - The thread was never mirrored
    pub async fn delete_thread(&self, thread_id: u64) -> Result<bool, AppError> {
        let thread_repo = DiscordThreadRepository::new(&self.ctx.db);

        if thread_repo.find_by_id(thread_id).await?.is_none() {
            return Ok(false);
        }

        AttachmentService::new(&self.ctx.db, self.ctx.storage.as_ref())
            .remove_thread_objects(thread_id)
            .await?;

        Ok(thread_repo.delete(thread_id).await?)
    }

    /// Gets the mirrored thread and its post, if both exist now.
    pub async fn find_thread(&self, thread_id: u64) -> Result<Option<MirroredThread>, AppError> {
        let Some(thread) = DiscordThreadRepository::new(&self.ctx.db)
            .find_by_id(thread_id)
            .await?
        else {
            return Ok(None);
        };

        let post = PostRepository::new(&self.ctx.db)
            .find_by_thread_id(thread_id)
            .await?;

        Ok(post.map(|post| MirroredThread { thread, post }))
    }

    /// Polls for a thread another event may still be writing.
    ///
    /// Waits `ctx.thread_backoff` between attempts and gives up with `None`.
    pub async fn wait_for_thread(&self, thread_id: u64) -> Result<Option<MirroredThread>, AppError> {
        let backoff = self.ctx.thread_backoff;

        for attempt in 0..backoff.attempts {
            if let Some(mirrored) = self.find_thread(thread_id).await? {
                return Ok(Some(mirrored));
            }

            tokio::time::sleep(backoff.delay(attempt)).await;
        }

        self.find_thread(thread_id).await
    }

    /// Gets a mirrored thread, fetching it from Discord when waiting is not enough.
    ///
    /// # Returns
    /// - `Ok(MirroredThread)` - The thread and its post
    /// - `Err(AppError::SyncErr(ThreadNotSynced))` - Still missing after the direct fetch
    pub async fn require_thread(&self, thread_id: u64) -> Result<MirroredThread, AppError> {
        if let Some(mirrored) = self.wait_for_thread(thread_id).await? {
            return Ok(mirrored);
        }

        tracing::debug!("Thread {} not mirrored yet, fetching from Discord", thread_id);

        if let Some(snapshot) = self.ctx.gateway.forum_thread(thread_id).await? {
            self.upsert_thread(&snapshot).await?;
        }

        self.find_thread(thread_id)
            .await?
            .ok_or_else(|| SyncError::ThreadNotSynced(thread_id).into())
    }
}
