use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::discord::{DiscordGuildParam, GuildSnapshot};

pub struct DiscordGuildRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiscordGuildRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a guild by its Discord guild ID.
    ///
    /// # Returns
    /// - `Ok(Some(DiscordGuildParam))` - Guild is linked to a community
    /// - `Ok(None)` - Guild is not linked
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, guild_id: u64) -> Result<Option<DiscordGuildParam>, DbErr> {
        entity::prelude::DiscordGuild::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(DiscordGuildParam::from_entity)
            .transpose()
    }

    pub async fn find_by_community_id(
        &self,
        community_id: i32,
    ) -> Result<Option<DiscordGuildParam>, DbErr> {
        entity::prelude::DiscordGuild::find()
            .filter(entity::discord_guild::Column::CommunityId.eq(community_id))
            .one(self.db)
            .await?
            .map(DiscordGuildParam::from_entity)
            .transpose()
    }

    /// Links a guild to a community by creating its row.
    pub async fn create(
        &self,
        guild: &GuildSnapshot,
        community_id: i32,
    ) -> Result<DiscordGuildParam, DbErr> {
        let entity = entity::discord_guild::ActiveModel {
            id: ActiveValue::Set(guild.guild_id.to_string()),
            name: ActiveValue::Set(guild.name.clone()),
            icon: ActiveValue::Set(guild.icon.clone()),
            community_id: ActiveValue::Set(community_id),
            last_sync_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        DiscordGuildParam::from_entity(entity)
    }

    /// Refreshes the name and icon of a linked guild. Unknown guilds are ignored.
    pub async fn update(&self, guild: &GuildSnapshot) -> Result<(), DbErr> {
        entity::prelude::DiscordGuild::update_many()
            .col_expr(
                entity::discord_guild::Column::Name,
                Expr::value(guild.name.clone()),
            )
            .col_expr(
                entity::discord_guild::Column::Icon,
                Expr::value(guild.icon.clone()),
            )
            .filter(entity::discord_guild::Column::Id.eq(guild.guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes the guild linked to a community, cascading to all mirrored data.
    ///
    /// # Returns
    /// - `Ok(true)` - A guild was unlinked
    /// - `Ok(false)` - The community had no guild
    pub async fn delete_by_community_id(&self, community_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DiscordGuild::delete_many()
            .filter(entity::discord_guild::Column::CommunityId.eq(community_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn update_last_sync(&self, guild_id: u64, synced_at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::DiscordGuild::update_many()
            .col_expr(
                entity::discord_guild::Column::LastSyncAt,
                Expr::value(Some(synced_at)),
            )
            .filter(entity::discord_guild::Column::Id.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets guilds never fully synced or last synced before `threshold`.
    pub async fn get_stale(&self, threshold: DateTime<Utc>) -> Result<Vec<DiscordGuildParam>, DbErr> {
        entity::prelude::DiscordGuild::find()
            .filter(
                Condition::any()
                    .add(entity::discord_guild::Column::LastSyncAt.is_null())
                    .add(entity::discord_guild::Column::LastSyncAt.lt(threshold)),
            )
            .all(self.db)
            .await?
            .into_iter()
            .map(DiscordGuildParam::from_entity)
            .collect()
    }
}
