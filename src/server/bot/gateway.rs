//! The Discord gateway backed by Serenity's REST client.

use std::{collections::BTreeSet, sync::Arc};

use async_trait::async_trait;
use serenity::all::{
    ChannelId, ChannelType, CreateInvite, CreateMessage, EditMessage, GetMessages, GuildChannel,
    GuildId, Http, MessageId,
};

use crate::server::{
    bot::convert,
    error::{sync::SyncError, AppError},
    model::discord::{
        DiscordUserParam, ForumChannelSnapshot, GuildSnapshot, MessageSnapshot, ThreadSnapshot,
    },
    service::discord::DiscordGateway,
};

/// Archived threads fetched per forum channel during a full sync.
const ARCHIVED_THREAD_LIMIT: u64 = 100;

pub struct SerenityGateway {
    http: Arc<Http>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    async fn guild_channel(&self, channel_id: u64) -> Result<Option<GuildChannel>, AppError> {
        let channel = self.http.get_channel(ChannelId::new(channel_id)).await?;

        Ok(channel.guild())
    }

    /// Gets a thread and the forum it belongs to; `None` outside forums.
    async fn thread_with_forum(
        &self,
        thread_id: u64,
    ) -> Result<Option<(GuildChannel, ForumChannelSnapshot)>, AppError> {
        let Some(thread) = self.guild_channel(thread_id).await? else {
            return Ok(None);
        };
        if !matches!(thread.kind, ChannelType::PublicThread | ChannelType::PrivateThread) {
            return Ok(None);
        }
        let Some(parent_id) = thread.parent_id else {
            return Ok(None);
        };

        let forum = self
            .guild_channel(parent_id.get())
            .await?
            .as_ref()
            .and_then(convert::forum_channel);

        Ok(forum.map(|forum| (thread, forum)))
    }
}

#[async_trait]
impl DiscordGateway for SerenityGateway {
    async fn guild(&self, guild_id: u64) -> Result<GuildSnapshot, AppError> {
        let guild = self.http.get_guild(GuildId::new(guild_id)).await?;

        Ok(convert::guild(&guild))
    }

    async fn forum_channels(&self, guild_id: u64) -> Result<Vec<ForumChannelSnapshot>, AppError> {
        let channels = self.http.get_channels(GuildId::new(guild_id)).await?;

        Ok(channels.iter().filter_map(convert::forum_channel).collect())
    }

    async fn forum_channel(&self, channel_id: u64) -> Result<Option<ForumChannelSnapshot>, AppError> {
        Ok(self
            .guild_channel(channel_id)
            .await?
            .as_ref()
            .and_then(convert::forum_channel))
    }

    async fn forum_parent_id(&self, _guild_id: u64, channel_id: u64) -> Result<Option<u64>, AppError> {
        Ok(self
            .thread_with_forum(channel_id)
            .await?
            .map(|(_, forum)| forum.channel_id))
    }

    async fn guild_members(
        &self,
        guild_id: u64,
        after: Option<u64>,
        limit: u64,
    ) -> Result<Vec<DiscordUserParam>, AppError> {
        let members = self
            .http
            .get_guild_members(GuildId::new(guild_id), Some(limit), after)
            .await?;

        Ok(members
            .iter()
            .map(|member| convert::discord_user(&member.user))
            .collect())
    }

    async fn forum_thread(&self, thread_id: u64) -> Result<Option<ThreadSnapshot>, AppError> {
        let Some((thread, forum)) = self.thread_with_forum(thread_id).await? else {
            return Ok(None);
        };

        // A forum thread's starter message shares the thread's id.
        let starter = match self
            .http
            .get_message(thread.id, MessageId::new(thread_id))
            .await
        {
            Ok(starter) => starter,
            Err(e) => {
                let err = AppError::from(e);
                if err.is_unknown_message() {
                    return Err(SyncError::StarterMessageMissing(thread_id).into());
                }
                return Err(err);
            }
        };

        Ok(Some(convert::thread(&thread, forum, &starter)))
    }

    async fn forum_thread_ids(&self, guild_id: u64, channel_id: u64) -> Result<Vec<u64>, AppError> {
        let channel = ChannelId::new(channel_id);

        let active = self
            .http
            .get_guild_active_threads(GuildId::new(guild_id))
            .await?;
        let archived = self
            .http
            .get_channel_archived_public_threads(channel, None, Some(ARCHIVED_THREAD_LIMIT))
            .await?;

        let ids: BTreeSet<u64> = active
            .threads
            .iter()
            .filter(|thread| thread.parent_id == Some(channel))
            .chain(archived.threads.iter())
            .map(|thread| thread.id.get())
            .collect();

        Ok(ids.into_iter().collect())
    }

    async fn thread_messages(
        &self,
        thread_id: u64,
        before: Option<u64>,
        limit: u8,
    ) -> Result<Vec<MessageSnapshot>, AppError> {
        let mut request = GetMessages::new().limit(limit);
        if let Some(before) = before {
            request = request.before(MessageId::new(before));
        }

        let messages = ChannelId::new(thread_id)
            .messages(&self.http, request)
            .await?;

        Ok(messages
            .iter()
            .map(|message| {
                let mut snapshot = convert::message(message, None);
                snapshot.guild_id = None;
                snapshot
            })
            .collect())
    }

    async fn send_thread_message(
        &self,
        thread_id: u64,
        content: &str,
        reply_to: Option<u64>,
    ) -> Result<MessageSnapshot, AppError> {
        let thread = ChannelId::new(thread_id);
        let mut message = CreateMessage::new().content(content);
        if let Some(reply_to) = reply_to {
            message = message.reference_message((thread, MessageId::new(reply_to)));
        }

        let sent = thread.send_message(&self.http, message).await?;

        Ok(convert::message(&sent, None))
    }

    async fn edit_thread_message(
        &self,
        thread_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<String, AppError> {
        let edited = ChannelId::new(thread_id)
            .edit_message(
                &self.http,
                MessageId::new(message_id),
                EditMessage::new().content(content),
            )
            .await?;

        Ok(edited.content)
    }

    async fn delete_thread_message(&self, thread_id: u64, message_id: u64) -> Result<(), AppError> {
        ChannelId::new(thread_id)
            .delete_message(&self.http, MessageId::new(message_id))
            .await?;

        Ok(())
    }

    async fn create_invite(&self, channel_id: u64) -> Result<String, AppError> {
        let invite = ChannelId::new(channel_id)
            .create_invite(
                &self.http,
                CreateInvite::new().max_age(0).max_uses(0).unique(true),
            )
            .await?;

        Ok(invite.url())
    }
}
