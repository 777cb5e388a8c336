//! Web comments and their mirror in Discord threads.
//!
//! A comment written on a post that mirrors a Discord thread is also posted to the
//! thread by the bot, quoting the commenter. Edits and deletions follow it there. The
//! question status of a post tracks whose turn it is to answer.

use entity::sea_orm_active_enums::{PostType, QuestionStatus};
use sea_orm::TransactionTrait;

use crate::server::{
    data::{
        comment::CommentRepository,
        discord::{DiscordMessageRepository, DiscordUserRepository},
        post::PostRepository,
        user::UserRepository,
        watched_post::WatchedPostRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        comment::{CommentParam, CreateCommentParam, NewCommentParam, DELETED_COMMENT_CONTENT},
        community::CommunityParam,
        discord::{UpsertMessageParam, DELETED_MESSAGE_CONTENT},
        post::PostParam,
        user::UserParam,
    },
    service::{discord::SyncContext, notification::NotificationService},
};

pub struct CommentService<'a> {
    ctx: &'a SyncContext,
}

impl<'a> CommentService<'a> {
    pub fn new(ctx: &'a SyncContext) -> Self {
        Self { ctx }
    }

    /// Creates a comment and posts it to the post's Discord thread.
    ///
    /// When replying to a mirrored comment the bot replies to its Discord message.
    /// Afterwards an admin reply hands a waiting question to the user, an author
    /// reply hands it back to the admins, the commenter starts watching the post and
    /// the other watchers are notified. An admin commenting on their own post changes
    /// nothing after the comment is created.
    ///
    /// # Returns
    /// - `Ok(CommentParam)` - The created comment
    /// - `Err(AppError::BadRequest)` - Empty content
    /// - `Err(AppError::NotFound)` - The post or parent comment is not in the community's post
    pub async fn create(
        &self,
        community: &CommunityParam,
        user: &UserParam,
        param: NewCommentParam,
    ) -> Result<CommentParam, AppError> {
        if param.content.trim().is_empty() {
            return Err(AppError::BadRequest("Content is required".to_string()));
        }

        let db = &self.ctx.db;
        let post = self.find_post(community, param.post_id).await?;
        let comment_repo = CommentRepository::new(db);

        let parent = match param.parent_id {
            Some(parent_id) => Some(
                comment_repo
                    .find_by_id(parent_id)
                    .await?
                    .filter(|parent| parent.post_id == post.id)
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Comment {} not found", parent_id))
                    })?,
            ),
            None => None,
        };

        let discord_message_id = match post.discord_thread_id {
            Some(thread_id) => {
                let content = discord_comment_content(
                    &community.domain,
                    post.id,
                    &user.username,
                    &param.content,
                );
                let reply_to = parent.as_ref().and_then(|parent| parent.discord_message_id);

                Some(self.post_to_thread(thread_id, &content, reply_to).await?)
            }
            None => None,
        };

        let comment = comment_repo
            .create(CreateCommentParam {
                post_id: post.id,
                author_id: user.id,
                parent_id: param.parent_id,
                content: param.content,
                discord_message_id,
            })
            .await?;

        if user.is_admin() && post.is_authored_by(user.id) {
            return Ok(comment);
        }

        let notification_service = NotificationService::new(db, self.ctx.notifier.as_ref());
        let post_repo = PostRepository::new(db);

        match post.question_status {
            Some(QuestionStatus::AwaitingAdminResponse) if user.is_admin() => {
                post_repo
                    .set_question_status(post.id, QuestionStatus::AwaitingUserResponse)
                    .await?;
            }
            Some(QuestionStatus::AwaitingUserResponse) if post.is_authored_by(user.id) => {
                post_repo
                    .set_question_status(post.id, QuestionStatus::AwaitingAdminResponse)
                    .await?;
                notification_service.notify_admins(&post).await?;
            }
            _ => {}
        }

        WatchedPostRepository::new(db).watch(post.id, user.id).await?;
        notification_service
            .notify_watchers(&post, &comment, Some(user.id))
            .await?;

        Ok(comment)
    }

    /// Replaces a comment's content, editing the bot's Discord message for web comments.
    ///
    /// # Returns
    /// - `Ok(CommentParam)` - The updated comment
    /// - `Err(AppError::AuthErr(AccessDenied))` - Neither the author nor an admin
    pub async fn update(
        &self,
        community: &CommunityParam,
        user: &UserParam,
        comment_id: i32,
        content: String,
    ) -> Result<CommentParam, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::BadRequest("Content is required".to_string()));
        }

        let (comment, post) = self.find_comment(community, comment_id).await?;
        require_author_or_admin(user, &comment)?;

        let updated = CommentRepository::new(&self.ctx.db)
            .update_content(comment.id, content.clone())
            .await?;

        if let (Some(thread_id), Some(message_id), Some(author_id)) =
            (post.discord_thread_id, comment.discord_message_id, comment.author_id)
        {
            let username = UserRepository::new(&self.ctx.db)
                .find_by_id(author_id)
                .await?
                .map(|author| author.username)
                .unwrap_or_else(|| user.username.clone());
            let discord_content =
                discord_comment_content(&community.domain, post.id, &username, &content);

            let stored = self
                .ctx
                .gateway
                .edit_thread_message(thread_id, message_id, &discord_content)
                .await?;
            DiscordMessageRepository::new(&self.ctx.db)
                .set_content(message_id, &stored)
                .await?;
        }

        Ok(updated)
    }

    /// Deletes a comment.
    ///
    /// A comment with replies is soft deleted, along with its mirrored message row.
    /// Otherwise it is removed, and a web comment's bot message is deleted from Discord.
    pub async fn delete(
        &self,
        community: &CommunityParam,
        user: &UserParam,
        comment_id: i32,
    ) -> Result<(), AppError> {
        let db = &self.ctx.db;
        let (comment, post) = self.find_comment(community, comment_id).await?;
        require_author_or_admin(user, &comment)?;

        let comment_repo = CommentRepository::new(db);
        let message_repo = DiscordMessageRepository::new(db);

        if comment_repo.count_replies(comment.id).await? > 0 {
            comment_repo
                .update_content(comment.id, DELETED_COMMENT_CONTENT.to_string())
                .await?;
            if let Some(message_id) = comment.discord_message_id {
                message_repo
                    .set_content(message_id, DELETED_MESSAGE_CONTENT)
                    .await?;
            }

            return Ok(());
        }

        comment_repo.delete(comment.id).await?;

        if let (Some(thread_id), Some(message_id), Some(_)) =
            (post.discord_thread_id, comment.discord_message_id, comment.author_id)
        {
            match self
                .ctx
                .gateway
                .delete_thread_message(thread_id, message_id)
                .await
            {
                Ok(()) => {}
                Err(e) if e.is_unknown_message() => {
                    tracing::debug!("Discord message {} was already deleted", message_id);
                }
                Err(e) => return Err(e),
            }
            message_repo.delete(message_id).await?;
        }

        Ok(())
    }

    /// Marks or unmarks a comment as the accepted answer of its question.
    ///
    /// Accepting resolves the question; withdrawing sends it back to the admins, who
    /// are notified.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The post is not a question
    /// - `Err(AppError::AuthErr(AccessDenied))` - Neither the post author nor an admin
    pub async fn mark_accepted(
        &self,
        community: &CommunityParam,
        user: &UserParam,
        comment_id: i32,
        is_accepted_answer: bool,
    ) -> Result<(), AppError> {
        let (comment, post) = self.find_comment(community, comment_id).await?;

        if post.post_type != PostType::Question {
            return Err(AppError::BadRequest(
                "Only questions can have accepted answers".to_string(),
            ));
        }

        if !post.is_authored_by(user.id) && !user.is_admin() {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("only the author of post {} or an admin can accept answers", post.id),
            )
            .into());
        }

        let status = if is_accepted_answer {
            QuestionStatus::Resolved
        } else {
            QuestionStatus::AwaitingAdminResponse
        };

        let txn = self.ctx.db.begin().await?;
        CommentRepository::new(&txn)
            .set_accepted(post.id, comment.id, is_accepted_answer)
            .await?;
        PostRepository::new(&txn)
            .set_question_status(post.id, status)
            .await?;
        txn.commit().await?;

        if !is_accepted_answer {
            NotificationService::new(&self.ctx.db, self.ctx.notifier.as_ref())
                .notify_admins(&post)
                .await?;
        }

        Ok(())
    }

    /// Posts a comment to a thread as the bot and records the message.
    async fn post_to_thread(
        &self,
        thread_id: u64,
        content: &str,
        reply_to: Option<u64>,
    ) -> Result<u64, AppError> {
        let sent = self
            .ctx
            .gateway
            .send_thread_message(thread_id, content, reply_to)
            .await?;

        DiscordUserRepository::new(&self.ctx.db)
            .upsert(&sent.author)
            .await?;
        DiscordMessageRepository::new(&self.ctx.db)
            .upsert(UpsertMessageParam {
                message_id: sent.message_id,
                thread_id,
                content: sent.content.clone(),
                author_id: sent.author.user_id,
                parent_id: reply_to,
                created_at: sent.created_at,
                updated_at: sent.updated_at(),
            })
            .await?;

        Ok(sent.message_id)
    }

    async fn find_post(&self, community: &CommunityParam, post_id: i32) -> Result<PostParam, AppError> {
        PostRepository::new(&self.ctx.db)
            .find_by_id(post_id)
            .await?
            .filter(|post| post.community_id == community.id)
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))
    }

    async fn find_comment(
        &self,
        community: &CommunityParam,
        comment_id: i32,
    ) -> Result<(CommentParam, PostParam), AppError> {
        let not_found = || AppError::NotFound(format!("Comment {} not found", comment_id));

        let comment = CommentRepository::new(&self.ctx.db)
            .find_by_id(comment_id)
            .await?
            .ok_or_else(not_found)?;
        let post = PostRepository::new(&self.ctx.db)
            .find_by_id(comment.post_id)
            .await?
            .filter(|post| post.community_id == community.id)
            .ok_or_else(not_found)?;

        Ok((comment, post))
    }
}

fn require_author_or_admin(user: &UserParam, comment: &CommentParam) -> Result<(), AppError> {
    if user.is_admin() || comment.is_authored_by(user.id) {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        user.id,
        format!("not the author of comment {}", comment.id),
    )
    .into())
}

/// Text the bot posts to Discord for a web comment.
pub fn discord_comment_content(domain: &str, post_id: i32, username: &str, content: &str) -> String {
    format!(
        "On [this post](https://{}/post/{}), {} commented:\n\n{}",
        domain, post_id, username, content
    )
}
