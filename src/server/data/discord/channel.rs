use entity::sea_orm_active_enums::PostType;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::discord::{
    DiscordChannelParam, ForumChannelSnapshot, UpdateChannelSettingsParam,
};

/// Repository for mirrored forum channels.
///
/// Discord-owned columns (name, kind, guild) are written by `upsert`; admin-owned sync
/// settings only by `update_settings` and `set_invite_link`.
pub struct DiscordChannelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiscordChannelRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a forum channel from Discord data.
    ///
    /// New channels start with syncing disabled and `QUESTION` as default post type.
    ///
    /// # Returns
    /// - `Ok(DiscordChannelParam)` - The created or updated channel with its settings
    /// - `Err(DbErr)` - Database error during insert/update or entity conversion failure
    pub async fn upsert(&self, channel: &ForumChannelSnapshot) -> Result<DiscordChannelParam, DbErr> {
        let entity = entity::prelude::DiscordChannel::insert(entity::discord_channel::ActiveModel {
            id: ActiveValue::Set(channel.channel_id.to_string()),
            guild_id: ActiveValue::Set(channel.guild_id.to_string()),
            name: ActiveValue::Set(channel.name.clone()),
            kind: ActiveValue::Set(channel.kind),
            should_sync: ActiveValue::Set(false),
            default_post_type: ActiveValue::Set(PostType::Question),
            default_post_tag_id: ActiveValue::Set(None),
            invite_link: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::column(entity::discord_channel::Column::Id)
                .update_columns([
                    entity::discord_channel::Column::GuildId,
                    entity::discord_channel::Column::Name,
                    entity::discord_channel::Column::Kind,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        DiscordChannelParam::from_entity(entity)
    }

    pub async fn find_by_id(&self, channel_id: u64) -> Result<Option<DiscordChannelParam>, DbErr> {
        entity::prelude::DiscordChannel::find_by_id(channel_id.to_string())
            .one(self.db)
            .await?
            .map(DiscordChannelParam::from_entity)
            .transpose()
    }

    /// Deletes a channel, cascading to its threads and their posts.
    ///
    /// # Returns
    /// - `Ok(true)` - The channel existed and was deleted
    /// - `Ok(false)` - The channel was never mirrored
    pub async fn delete(&self, channel_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::DiscordChannel::delete_by_id(channel_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the channels of a guild ordered by name, each with its mirrored thread count.
    pub async fn get_by_guild_with_thread_counts(
        &self,
        guild_id: u64,
    ) -> Result<Vec<(DiscordChannelParam, u64)>, DbErr> {
        let entities = entity::prelude::DiscordChannel::find()
            .filter(entity::discord_channel::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::discord_channel::Column::Name)
            .all(self.db)
            .await?;

        let mut channels = Vec::with_capacity(entities.len());
        for entity in entities {
            let thread_count = entity::prelude::DiscordThread::find()
                .filter(entity::discord_thread::Column::ChannelId.eq(entity.id.clone()))
                .count(self.db)
                .await?;

            channels.push((DiscordChannelParam::from_entity(entity)?, thread_count));
        }

        Ok(channels)
    }

    /// Replaces the sync settings of a channel.
    pub async fn update_settings(
        &self,
        channel_id: u64,
        param: UpdateChannelSettingsParam,
    ) -> Result<DiscordChannelParam, DbErr> {
        let entity = entity::discord_channel::ActiveModel {
            id: ActiveValue::Unchanged(channel_id.to_string()),
            should_sync: ActiveValue::Set(param.should_sync),
            default_post_type: ActiveValue::Set(param.default_post_type),
            default_post_tag_id: ActiveValue::Set(param.default_post_tag_id),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        DiscordChannelParam::from_entity(entity)
    }

    pub async fn set_invite_link(
        &self,
        channel_id: u64,
        invite_link: Option<String>,
    ) -> Result<(), DbErr> {
        entity::prelude::DiscordChannel::update_many()
            .col_expr(
                entity::discord_channel::Column::InviteLink,
                Expr::value(invite_link),
            )
            .filter(entity::discord_channel::Column::Id.eq(channel_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the first stored invite link among the guild's channels.
    pub async fn find_first_invite_link(&self, guild_id: u64) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::DiscordChannel::find()
            .filter(entity::discord_channel::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::discord_channel::Column::InviteLink.is_not_null())
            .order_by_asc(entity::discord_channel::Column::Name)
            .one(self.db)
            .await?;

        Ok(entity.and_then(|channel| channel.invite_link))
    }
}
