use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

use crate::server::model::discord::ForumTagSnapshot;

/// Colour given to tags first seen on Discord.
pub const DEFAULT_TAG_COLOR: &str = "#000000";

pub struct PostTagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostTagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a forum tag as a post tag of the community.
    ///
    /// New tags get the default colour; existing tags only have their name refreshed so
    /// colours picked by admins survive.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the post tag
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert_discord_tag(
        &self,
        community_id: i32,
        tag: &ForumTagSnapshot,
    ) -> Result<i32, DbErr> {
        let entity = entity::prelude::PostTag::insert(entity::post_tag::ActiveModel {
            community_id: ActiveValue::Set(community_id),
            name: ActiveValue::Set(tag.name.clone()),
            color: ActiveValue::Set(DEFAULT_TAG_COLOR.to_string()),
            discord_tag_id: ActiveValue::Set(Some(tag.tag_id.to_string())),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::post_tag::Column::DiscordTagId)
                .update_column(entity::post_tag::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Gets the ids of the community's tags mirroring the given Discord tags.
    pub async fn find_ids_by_discord_tags(
        &self,
        community_id: i32,
        discord_tag_ids: &[u64],
    ) -> Result<Vec<i32>, DbErr> {
        if discord_tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::PostTag::find()
            .select_only()
            .column(entity::post_tag::Column::Id)
            .filter(entity::post_tag::Column::CommunityId.eq(community_id))
            .filter(
                entity::post_tag::Column::DiscordTagId
                    .is_in(discord_tag_ids.iter().map(|id| id.to_string())),
            )
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
