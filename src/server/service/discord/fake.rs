//! In-memory stand-ins for Discord, object storage and notification delivery.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{storage::StorageError, sync::SyncError, AppError},
    model::{
        comment::CommentParam,
        discord::{
            AttachmentSnapshot, DiscordUserParam, ForumChannelSnapshot, GuildSnapshot,
            MessageSnapshot, StarterMessageSnapshot, ThreadSnapshot,
        },
        post::PostParam,
        user::UserParam,
    },
    service::{
        discord::{Backoff, DiscordGateway, SyncContext},
        notification::Notifier,
    },
    storage::AttachmentStorage,
};

pub const BOT_USER_ID: u64 = 900_000;
pub const APP_URL: &str = "https://community.trypaladin.com";

/// A message the bot posted through the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub thread_id: u64,
    pub message_id: u64,
    pub content: String,
    pub reply_to: Option<u64>,
}

#[derive(Default)]
pub struct FakeGateway {
    pub guilds: Mutex<HashMap<u64, GuildSnapshot>>,
    pub channels: Mutex<Vec<ForumChannelSnapshot>>,
    pub members: Mutex<Vec<DiscordUserParam>>,
    pub threads: Mutex<HashMap<u64, ThreadSnapshot>>,
    pub messages: Mutex<HashMap<u64, Vec<MessageSnapshot>>>,
    pub sent: Mutex<Vec<SentMessage>>,
    pub edited: Mutex<Vec<(u64, String)>>,
    pub deleted: Mutex<Vec<u64>>,
    pub invites: Mutex<Vec<u64>>,
    /// Threads whose lookup fails with an internal error.
    pub failing_threads: Mutex<Vec<u64>>,
    /// Threads whose starter message Discord no longer has.
    pub missing_starters: Mutex<Vec<u64>>,
    /// `after` cursor of every member page requested.
    pub member_requests: Mutex<Vec<Option<u64>>>,
    /// `before` cursor of every message page requested, per thread.
    pub message_requests: Mutex<Vec<(u64, Option<u64>)>>,
    next_message_id: AtomicU64,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            next_message_id: AtomicU64::new(800_000),
            ..Default::default()
        }
    }

    pub fn add_channel(&self, channel: ForumChannelSnapshot) {
        self.channels.lock().unwrap().push(channel);
    }

    pub fn add_thread(&self, thread: ThreadSnapshot) {
        self.threads.lock().unwrap().insert(thread.thread_id, thread);
    }

    pub fn add_message(&self, message: MessageSnapshot) {
        self.messages
            .lock()
            .unwrap()
            .entry(message.channel_id)
            .or_default()
            .push(message);
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiscordGateway for FakeGateway {
    async fn guild(&self, guild_id: u64) -> Result<GuildSnapshot, AppError> {
        self.guilds
            .lock()
            .unwrap()
            .get(&guild_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", guild_id)))
    }

    async fn forum_channels(&self, guild_id: u64) -> Result<Vec<ForumChannelSnapshot>, AppError> {
        Ok(self
            .channels
            .lock()
            .unwrap()
            .iter()
            .filter(|channel| channel.guild_id == guild_id)
            .cloned()
            .collect())
    }

    async fn forum_channel(&self, channel_id: u64) -> Result<Option<ForumChannelSnapshot>, AppError> {
        Ok(self
            .channels
            .lock()
            .unwrap()
            .iter()
            .find(|channel| channel.channel_id == channel_id)
            .cloned())
    }

    async fn forum_parent_id(&self, _guild_id: u64, channel_id: u64) -> Result<Option<u64>, AppError> {
        Ok(self
            .threads
            .lock()
            .unwrap()
            .get(&channel_id)
            .map(|thread| thread.channel.channel_id))
    }

    async fn guild_members(
        &self,
        _guild_id: u64,
        after: Option<u64>,
        limit: u64,
    ) -> Result<Vec<DiscordUserParam>, AppError> {
        self.member_requests.lock().unwrap().push(after);
        let mut members = self.members.lock().unwrap().clone();
        members.sort_by_key(|member| member.user_id);

        Ok(members
            .into_iter()
            .filter(|member| after.is_none_or(|after| member.user_id > after))
            .take(limit as usize)
            .collect())
    }

    async fn forum_thread(&self, thread_id: u64) -> Result<Option<ThreadSnapshot>, AppError> {
        if self.failing_threads.lock().unwrap().contains(&thread_id) {
            return Err(AppError::InternalError(format!("thread {} unavailable", thread_id)));
        }
        if self.missing_starters.lock().unwrap().contains(&thread_id) {
            return Err(SyncError::StarterMessageMissing(thread_id).into());
        }

        Ok(self.threads.lock().unwrap().get(&thread_id).cloned())
    }

    async fn forum_thread_ids(&self, _guild_id: u64, channel_id: u64) -> Result<Vec<u64>, AppError> {
        let mut ids: Vec<u64> = self
            .threads
            .lock()
            .unwrap()
            .values()
            .filter(|thread| thread.channel.channel_id == channel_id)
            .map(|thread| thread.thread_id)
            .collect();
        ids.sort();

        Ok(ids)
    }

    async fn thread_messages(
        &self,
        thread_id: u64,
        before: Option<u64>,
        limit: u8,
    ) -> Result<Vec<MessageSnapshot>, AppError> {
        self.message_requests.lock().unwrap().push((thread_id, before));
        let mut messages = self
            .messages
            .lock()
            .unwrap()
            .get(&thread_id)
            .cloned()
            .unwrap_or_default();
        messages.sort_by(|a, b| b.message_id.cmp(&a.message_id));

        Ok(messages
            .into_iter()
            .filter(|message| before.is_none_or(|before| message.message_id < before))
            .take(usize::from(limit))
            .map(|mut message| {
                message.guild_id = None;
                message.forum_channel_id = None;
                message
            })
            .collect())
    }

    async fn send_thread_message(
        &self,
        thread_id: u64,
        content: &str,
        reply_to: Option<u64>,
    ) -> Result<MessageSnapshot, AppError> {
        let message_id = self.next_message_id.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(SentMessage {
            thread_id,
            message_id,
            content: content.to_string(),
            reply_to,
        });

        Ok(MessageSnapshot {
            message_id,
            channel_id: thread_id,
            guild_id: None,
            forum_channel_id: None,
            author: bot_user(),
            content: content.to_string(),
            created_at: Utc::now(),
            edited_at: None,
            is_system: false,
            attachments: Vec::new(),
            reference: None,
        })
    }

    async fn edit_thread_message(
        &self,
        _thread_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<String, AppError> {
        self.edited
            .lock()
            .unwrap()
            .push((message_id, content.to_string()));

        Ok(content.to_string())
    }

    async fn delete_thread_message(&self, _thread_id: u64, message_id: u64) -> Result<(), AppError> {
        self.deleted.lock().unwrap().push(message_id);

        Ok(())
    }

    async fn create_invite(&self, channel_id: u64) -> Result<String, AppError> {
        self.invites.lock().unwrap().push(channel_id);

        Ok(format!("https://discord.gg/invite-{}", channel_id))
    }
}

/// Object storage keeping keys only; uploads of URLs listed in `failing` fail.
#[derive(Default)]
pub struct MemoryStorage {
    pub objects: Mutex<Vec<String>>,
    pub failing: Mutex<Vec<String>>,
}

impl MemoryStorage {
    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl AttachmentStorage for MemoryStorage {
    async fn rehost(
        &self,
        source_url: &str,
        key: &str,
        _content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        if self.failing.lock().unwrap().iter().any(|url| url == source_url) {
            return Err(StorageError::Upload {
                key: key.to_string(),
                reason: "rejected".to_string(),
            });
        }

        self.objects.lock().unwrap().push(key.to_string());

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.objects.lock().unwrap().retain(|stored| stored != key);

        Ok(())
    }
}

/// Records who was notified about which post.
#[derive(Default)]
pub struct RecordingNotifier {
    pub comments: Mutex<Vec<(i32, i32)>>,
    pub admins: Mutex<Vec<(i32, i32)>>,
}

impl RecordingNotifier {
    /// `(recipient user id, post id)` pairs of admin notifications.
    pub fn admin_notifications(&self) -> Vec<(i32, i32)> {
        self.admins.lock().unwrap().clone()
    }

    /// `(recipient user id, comment id)` pairs of comment notifications.
    pub fn comment_notifications(&self) -> Vec<(i32, i32)> {
        self.comments.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn comment_notification(
        &self,
        recipient: &UserParam,
        _post: &PostParam,
        comment: &CommentParam,
    ) -> Result<(), AppError> {
        self.comments.lock().unwrap().push((recipient.id, comment.id));

        Ok(())
    }

    async fn admin_notification(&self, recipient: &UserParam, post: &PostParam) -> Result<(), AppError> {
        self.admins.lock().unwrap().push((recipient.id, post.id));

        Ok(())
    }
}

/// Fakes wired into a `SyncContext`, kept around for assertions.
pub struct Fakes {
    pub gateway: Arc<FakeGateway>,
    pub storage: Arc<MemoryStorage>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Fakes {
    pub fn new() -> Self {
        Self {
            gateway: Arc::new(FakeGateway::new()),
            storage: Arc::new(MemoryStorage::default()),
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    /// A context that never sleeps while waiting for threads.
    pub fn context(&self, db: &DatabaseConnection) -> SyncContext {
        SyncContext::new(
            db.clone(),
            self.gateway.clone(),
            self.storage.clone(),
            self.notifier.clone(),
            BOT_USER_ID,
            APP_URL.to_string(),
        )
        .with_thread_backoff(Backoff::new(2, Duration::ZERO))
    }
}

pub fn bot_user() -> DiscordUserParam {
    discord_user(BOT_USER_ID, "Paladin")
}

pub fn discord_user(user_id: u64, username: &str) -> DiscordUserParam {
    DiscordUserParam {
        user_id,
        username: username.to_string(),
        discriminator: None,
        avatar: None,
    }
}

pub fn forum_channel(channel_id: u64, guild_id: u64) -> ForumChannelSnapshot {
    ForumChannelSnapshot {
        channel_id,
        guild_id,
        name: format!("forum-{}", channel_id),
        kind: 15,
        available_tags: Vec::new(),
    }
}

pub fn thread_snapshot(
    thread_id: u64,
    channel: ForumChannelSnapshot,
    author: DiscordUserParam,
    content: &str,
) -> ThreadSnapshot {
    ThreadSnapshot {
        thread_id,
        guild_id: channel.guild_id,
        title: format!("Thread {}", thread_id),
        applied_tags: Vec::new(),
        channel,
        starter: StarterMessageSnapshot {
            message_id: thread_id,
            author,
            content: content.to_string(),
            created_at: Utc::now(),
            edited_at: None,
            attachments: Vec::new(),
        },
    }
}

/// A message of a forum thread as delivered by the gateway.
pub fn thread_message(
    message_id: u64,
    thread: &ThreadSnapshot,
    author: DiscordUserParam,
    content: &str,
) -> MessageSnapshot {
    MessageSnapshot {
        message_id,
        channel_id: thread.thread_id,
        guild_id: Some(thread.guild_id),
        forum_channel_id: Some(thread.channel.channel_id),
        author,
        content: content.to_string(),
        created_at: Utc::now(),
        edited_at: None,
        is_system: false,
        attachments: Vec::new(),
        reference: None,
    }
}

pub fn attachment(attachment_id: u64, filename: &str) -> AttachmentSnapshot {
    AttachmentSnapshot {
        attachment_id,
        filename: filename.to_string(),
        content_type: None,
        size: 64,
        url: format!("https://cdn.discordapp.com/attachments/{}/{}", attachment_id, filename),
    }
}
