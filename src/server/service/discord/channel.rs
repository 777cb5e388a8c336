use crate::server::{
    data::{
        discord::{DiscordChannelRepository, DiscordGuildRepository},
        post_tag::PostTagRepository,
    },
    error::AppError,
    model::discord::{DiscordChannelParam, ForumChannelSnapshot, UpdateChannelSettingsParam},
    service::discord::{DiscordGuildService, NoProgress, SyncContext, Synchronizer},
};

pub struct DiscordChannelService<'a> {
    ctx: &'a SyncContext,
}

impl<'a> DiscordChannelService<'a> {
    pub fn new(ctx: &'a SyncContext) -> Self {
        Self { ctx }
    }

    /// Mirrors a forum channel of a linked guild and its available tags.
    ///
    /// Every forum tag becomes a post tag of the community; existing tags only get
    /// their name refreshed.
    pub async fn upsert_forum_channel(
        &self,
        channel: &ForumChannelSnapshot,
    ) -> Result<DiscordChannelParam, AppError> {
        let community = DiscordGuildService::new(self.ctx)
            .require_linked(channel.guild_id)
            .await?;

        let stored = DiscordChannelRepository::new(&self.ctx.db)
            .upsert(channel)
            .await?;

        let tag_repo = PostTagRepository::new(&self.ctx.db);
        for tag in &channel.available_tags {
            tag_repo.upsert_discord_tag(community.id, tag).await?;
        }

        Ok(stored)
    }

    /// Deletes a mirrored channel; its threads and their posts cascade.
    pub async fn delete_channel(&self, channel_id: u64) -> Result<bool, AppError> {
        Ok(DiscordChannelRepository::new(&self.ctx.db)
            .delete(channel_id)
            .await?)
    }

    /// Gets the community's mirrored channels ordered by name, with thread counts.
    ///
    /// Empty when the community has no linked guild.
    pub async fn list_for_community(
        &self,
        community_id: i32,
    ) -> Result<Vec<(DiscordChannelParam, u64)>, AppError> {
        let Some(guild) = DiscordGuildRepository::new(&self.ctx.db)
            .find_by_community_id(community_id)
            .await?
        else {
            return Ok(Vec::new());
        };

        Ok(DiscordChannelRepository::new(&self.ctx.db)
            .get_by_guild_with_thread_counts(guild.guild_id)
            .await?)
    }

    /// Replaces a channel's sync settings and brings the mirror in line with them.
    ///
    /// A background sync of the channel is started. Enabling sync creates a permanent
    /// invite when the channel has none; disabling it forgets the stored invite.
    ///
    /// # Returns
    /// - `Ok(DiscordChannelParam)` - The channel with its new settings
    /// - `Err(AppError::NotFound)` - The channel is not a forum channel of the community's guild
    pub async fn update_settings(
        &self,
        community_id: i32,
        channel_id: u64,
        param: UpdateChannelSettingsParam,
    ) -> Result<DiscordChannelParam, AppError> {
        let channel_repo = DiscordChannelRepository::new(&self.ctx.db);
        let not_found = || AppError::NotFound("Channel not found".to_string());

        let guild = DiscordGuildRepository::new(&self.ctx.db)
            .find_by_community_id(community_id)
            .await?
            .ok_or_else(not_found)?;
        let existing = channel_repo
            .find_by_id(channel_id)
            .await?
            .filter(|channel| channel.guild_id == guild.guild_id)
            .ok_or_else(not_found)?;

        let mut channel = channel_repo.update_settings(existing.channel_id, param).await?;

        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            if let Err(e) = Synchronizer::new(&ctx)
                .sync_channel(channel_id, &NoProgress)
                .await
            {
                tracing::error!("Background sync of channel {} failed: {}", channel_id, e);
            }
        });

        if self.ctx.gateway.forum_channel(channel_id).await?.is_none() {
            return Err(not_found());
        }

        if channel.should_sync && channel.invite_link.is_none() {
            let invite = self.ctx.gateway.create_invite(channel_id).await?;
            channel_repo
                .set_invite_link(channel_id, Some(invite.clone()))
                .await?;
            channel.invite_link = Some(invite);
        } else if !channel.should_sync && channel.invite_link.is_some() {
            channel_repo.set_invite_link(channel_id, None).await?;
            channel.invite_link = None;
        }

        Ok(channel)
    }

    /// Gets the first stored invite of the community's guild, if any.
    pub async fn invite_link(&self, community_id: i32) -> Result<Option<String>, AppError> {
        let Some(guild) = DiscordGuildRepository::new(&self.ctx.db)
            .find_by_community_id(community_id)
            .await?
        else {
            return Ok(None);
        };

        Ok(DiscordChannelRepository::new(&self.ctx.db)
            .find_first_invite_link(guild.guild_id)
            .await?)
    }
}
