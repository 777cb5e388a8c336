//! Post data repository.
//!
//! Covers the parts of posts the Discord mirror and the comment routes touch: mirrored
//! post upserts keyed by `discord_thread_id`, question status transitions and tag
//! assignment.

use entity::sea_orm_active_enums::QuestionStatus;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::server::model::post::{PostParam, UpsertMirroredPostParam};

pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, post_id: i32) -> Result<Option<PostParam>, DbErr> {
        entity::prelude::Post::find_by_id(post_id)
            .one(self.db)
            .await?
            .map(PostParam::from_entity)
            .transpose()
    }

    /// Finds the post mirroring a Discord thread.
    pub async fn find_by_thread_id(&self, thread_id: u64) -> Result<Option<PostParam>, DbErr> {
        entity::prelude::Post::find()
            .filter(entity::post::Column::DiscordThreadId.eq(thread_id.to_string()))
            .one(self.db)
            .await?
            .map(PostParam::from_entity)
            .transpose()
    }

    /// Creates or updates the post mirroring a Discord thread.
    ///
    /// Mirrored posts have no web author and are public. On conflict every mirrored
    /// column is overwritten, statuses included; callers decide whether to pass the
    /// existing statuses or fresh defaults.
    ///
    /// # Arguments
    /// - `param` - Post values derived from the thread and its channel
    ///
    /// # Returns
    /// - `Ok(PostParam)` - The created or updated post
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert_mirrored(&self, param: UpsertMirroredPostParam) -> Result<PostParam, DbErr> {
        let entity = entity::prelude::Post::insert(entity::post::ActiveModel {
            community_id: ActiveValue::Set(param.community_id),
            author_id: ActiveValue::Set(None),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            post_type: ActiveValue::Set(param.post_type),
            question_status: ActiveValue::Set(param.statuses.question_status),
            feedback_status: ActiveValue::Set(param.statuses.feedback_status),
            private: ActiveValue::Set(false),
            discord_thread_id: ActiveValue::Set(Some(param.discord_thread_id.to_string())),
            created_at: ActiveValue::Set(param.created_at),
            updated_at: ActiveValue::Set(param.updated_at),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::post::Column::DiscordThreadId)
                .update_columns([
                    entity::post::Column::Title,
                    entity::post::Column::Content,
                    entity::post::Column::PostType,
                    entity::post::Column::QuestionStatus,
                    entity::post::Column::FeedbackStatus,
                    entity::post::Column::CreatedAt,
                    entity::post::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        PostParam::from_entity(entity)
    }

    pub async fn set_question_status(
        &self,
        post_id: i32,
        status: QuestionStatus,
    ) -> Result<(), DbErr> {
        entity::post::ActiveModel {
            id: ActiveValue::Unchanged(post_id),
            question_status: ActiveValue::Set(Some(status)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Whether at least one post exists. Backs the health check.
    pub async fn any_exists(&self) -> Result<bool, DbErr> {
        let post = entity::prelude::Post::find().one(self.db).await?;

        Ok(post.is_some())
    }

    /// Replaces the tags of a post.
    ///
    /// Duplicate ids are ignored. Run inside a transaction so readers never observe a
    /// post without its tags.
    pub async fn replace_tags(&self, post_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::PostTagOnPost::delete_many()
            .filter(entity::post_tag_on_post::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        let mut unique_ids = tag_ids.to_vec();
        unique_ids.sort_unstable();
        unique_ids.dedup();

        if unique_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::PostTagOnPost::insert_many(unique_ids.into_iter().map(|tag_id| {
            entity::post_tag_on_post::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                tag_id: ActiveValue::Set(tag_id),
            }
        }))
        .on_conflict(
            OnConflict::columns([
                entity::post_tag_on_post::Column::PostId,
                entity::post_tag_on_post::Column::TagId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn get_tag_ids(&self, post_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::PostTagOnPost::find()
            .select_only()
            .column(entity::post_tag_on_post::Column::TagId)
            .filter(entity::post_tag_on_post::Column::PostId.eq(post_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
