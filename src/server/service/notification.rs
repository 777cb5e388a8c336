//! Notification fan-out for new comments and posts needing admin attention.
//!
//! Delivery sits behind the [`Notifier`] trait. The shipped [`LogNotifier`] records each
//! notification through `tracing`; recipients are filtered by their notification
//! preferences before it is called.

use async_trait::async_trait;
use futures::future::join_all;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::{user::UserRepository, watched_post::WatchedPostRepository},
    error::AppError,
    model::{comment::CommentParam, post::PostParam, user::UserParam},
};

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Tells a watcher that a post they follow received a comment.
    async fn comment_notification(
        &self,
        recipient: &UserParam,
        post: &PostParam,
        comment: &CommentParam,
    ) -> Result<(), AppError>;

    /// Tells an admin that a post is awaiting an admin response.
    async fn admin_notification(&self, recipient: &UserParam, post: &PostParam) -> Result<(), AppError>;
}

pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn comment_notification(
        &self,
        recipient: &UserParam,
        post: &PostParam,
        comment: &CommentParam,
    ) -> Result<(), AppError> {
        tracing::info!(
            "Notifying {} of comment {} on post {} ({})",
            recipient.email,
            comment.id,
            post.id,
            post.title
        );

        Ok(())
    }

    async fn admin_notification(&self, recipient: &UserParam, post: &PostParam) -> Result<(), AppError> {
        tracing::info!(
            "Notifying admin {} that post {} ({}) awaits a response",
            recipient.email,
            post.id,
            post.title
        );

        Ok(())
    }
}

pub struct NotificationService<'a, C: ConnectionTrait> {
    db: &'a C,
    notifier: &'a dyn Notifier,
}

impl<'a, C: ConnectionTrait> NotificationService<'a, C> {
    pub fn new(db: &'a C, notifier: &'a dyn Notifier) -> Self {
        Self { db, notifier }
    }

    /// Notifies the community's admins who opted into admin notifications.
    ///
    /// Failed deliveries are logged; they never fail the caller.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of admins notified successfully
    /// - `Err(AppError::DbErr)` - Failed to load the admins
    pub async fn notify_admins(&self, post: &PostParam) -> Result<usize, AppError> {
        let admins = UserRepository::new(self.db)
            .get_admins(post.community_id)
            .await?;

        let results = join_all(
            admins
                .iter()
                .filter(|admin| admin.admin_email_notifications_enabled)
                .map(|admin| async move {
                    let result = self.notifier.admin_notification(admin, post).await;
                    if let Err(e) = &result {
                        tracing::warn!("Failed to notify admin {}: {}", admin.id, e);
                    }
                    result
                }),
        )
        .await;

        Ok(results.iter().filter(|result| result.is_ok()).count())
    }

    /// Notifies the post's watchers of a new comment, skipping its author.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of watchers notified successfully
    /// - `Err(AppError::DbErr)` - Failed to load the watchers
    pub async fn notify_watchers(
        &self,
        post: &PostParam,
        comment: &CommentParam,
        exclude_user_id: Option<i32>,
    ) -> Result<usize, AppError> {
        let watchers = WatchedPostRepository::new(self.db)
            .get_watchers(post.id, exclude_user_id)
            .await?;

        let results = join_all(
            watchers
                .iter()
                .filter(|watcher| watcher.email_notifications_enabled)
                .map(|watcher| async move {
                    let result = self
                        .notifier
                        .comment_notification(watcher, post, comment)
                        .await;
                    if let Err(e) = &result {
                        tracing::warn!("Failed to notify watcher {}: {}", watcher.id, e);
                    }
                    result
                }),
        )
        .await;

        Ok(results.iter().filter(|result| result.is_ok()).count())
    }
}
