use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::discord::DiscordUserParam;

pub struct DiscordUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiscordUserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a Discord user, refreshing username, discriminator and avatar.
    pub async fn upsert(&self, user: &DiscordUserParam) -> Result<(), DbErr> {
        entity::prelude::DiscordUser::insert(entity::discord_user::ActiveModel {
            id: ActiveValue::Set(user.user_id.to_string()),
            username: ActiveValue::Set(user.username.clone()),
            discriminator: ActiveValue::Set(user.discriminator.clone()),
            avatar: ActiveValue::Set(user.avatar.clone()),
        })
        .on_conflict(
            OnConflict::column(entity::discord_user::Column::Id)
                .update_columns([
                    entity::discord_user::Column::Username,
                    entity::discord_user::Column::Discriminator,
                    entity::discord_user::Column::Avatar,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Gets the stored users among `user_ids`; unknown ids are simply absent.
    pub async fn find_by_ids(&self, user_ids: &[u64]) -> Result<Vec<DiscordUserParam>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::DiscordUser::find()
            .filter(
                entity::discord_user::Column::Id.is_in(user_ids.iter().map(|id| id.to_string())),
            )
            .all(self.db)
            .await?
            .into_iter()
            .map(DiscordUserParam::from_entity)
            .collect()
    }
}
