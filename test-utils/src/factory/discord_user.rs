//! Discord user factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct DiscordUserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    username: String,
    avatar: Option<String>,
}

impl<'a> DiscordUserFactory<'a> {
    /// Defaults to an auto-incremented snowflake and `"discord_user_{id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            username: format!("discord_user_{}", id),
            avatar: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = avatar;
        self
    }

    pub async fn build(self) -> Result<entity::discord_user::Model, DbErr> {
        entity::discord_user::ActiveModel {
            id: ActiveValue::Set(self.id),
            username: ActiveValue::Set(self.username),
            discriminator: ActiveValue::Set(None),
            avatar: ActiveValue::Set(self.avatar),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_discord_user(
    db: &DatabaseConnection,
) -> Result<entity::discord_user::Model, DbErr> {
    DiscordUserFactory::new(db).build().await
}
