//! Post tag factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PostTagFactory<'a> {
    db: &'a DatabaseConnection,
    community_id: i32,
    name: String,
    color: String,
    discord_tag_id: Option<String>,
}

impl<'a> PostTagFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, community_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            community_id,
            name: format!("Tag {}", id),
            color: "#000000".to_string(),
            discord_tag_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn discord_tag_id(mut self, discord_tag_id: Option<String>) -> Self {
        self.discord_tag_id = discord_tag_id;
        self
    }

    pub async fn build(self) -> Result<entity::post_tag::Model, DbErr> {
        entity::post_tag::ActiveModel {
            community_id: ActiveValue::Set(self.community_id),
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(self.color),
            discord_tag_id: ActiveValue::Set(self.discord_tag_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_post_tag(
    db: &DatabaseConnection,
    community_id: i32,
) -> Result<entity::post_tag::Model, DbErr> {
    PostTagFactory::new(db, community_id).build().await
}
