//! Comment data repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::comment::{CommentParam, CreateCommentParam, UpsertMirroredCommentParam};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, comment_id: i32) -> Result<Option<CommentParam>, DbErr> {
        entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await?
            .map(CommentParam::from_entity)
            .transpose()
    }

    /// Finds the comment mirroring (or mirrored as) a Discord message.
    pub async fn find_by_discord_message_id(
        &self,
        message_id: u64,
    ) -> Result<Option<CommentParam>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::DiscordMessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?
            .map(CommentParam::from_entity)
            .transpose()
    }

    /// Creates a comment written on the web.
    pub async fn create(&self, param: CreateCommentParam) -> Result<CommentParam, DbErr> {
        let now = Utc::now();
        let entity = entity::comment::ActiveModel {
            post_id: ActiveValue::Set(param.post_id),
            author_id: ActiveValue::Set(Some(param.author_id)),
            parent_id: ActiveValue::Set(param.parent_id),
            content: ActiveValue::Set(param.content),
            discord_message_id: ActiveValue::Set(param.discord_message_id.map(|id| id.to_string())),
            is_accepted_answer: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        CommentParam::from_entity(entity)
    }

    /// Creates or updates the comment mirroring a Discord message.
    ///
    /// The author stays NULL; accepted answer flags set on the web are preserved.
    pub async fn upsert_mirrored(
        &self,
        param: UpsertMirroredCommentParam,
    ) -> Result<CommentParam, DbErr> {
        let entity = entity::prelude::Comment::insert(entity::comment::ActiveModel {
            post_id: ActiveValue::Set(param.post_id),
            author_id: ActiveValue::Set(None),
            parent_id: ActiveValue::Set(param.parent_id),
            content: ActiveValue::Set(param.content),
            discord_message_id: ActiveValue::Set(Some(param.discord_message_id.to_string())),
            is_accepted_answer: ActiveValue::Set(false),
            created_at: ActiveValue::Set(param.created_at),
            updated_at: ActiveValue::Set(param.updated_at),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::comment::Column::DiscordMessageId)
                .update_columns([
                    entity::comment::Column::PostId,
                    entity::comment::Column::ParentId,
                    entity::comment::Column::Content,
                    entity::comment::Column::CreatedAt,
                    entity::comment::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        CommentParam::from_entity(entity)
    }

    pub async fn update_content(
        &self,
        comment_id: i32,
        content: String,
    ) -> Result<CommentParam, DbErr> {
        let entity = entity::comment::ActiveModel {
            id: ActiveValue::Unchanged(comment_id),
            content: ActiveValue::Set(content),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        CommentParam::from_entity(entity)
    }

    /// Counts the comments replying to `comment_id`.
    pub async fn count_replies(&self, comment_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ParentId.eq(comment_id))
            .count(self.db)
            .await
    }

    pub async fn delete(&self, comment_id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets the accepted answer flag of one comment, clearing it on every other
    /// comment of the post.
    pub async fn set_accepted(
        &self,
        post_id: i32,
        comment_id: i32,
        is_accepted_answer: bool,
    ) -> Result<(), DbErr> {
        entity::prelude::Comment::update_many()
            .col_expr(entity::comment::Column::IsAcceptedAnswer, Expr::value(false))
            .filter(entity::comment::Column::PostId.eq(post_id))
            .filter(entity::comment::Column::IsAcceptedAnswer.eq(true))
            .filter(entity::comment::Column::Id.ne(comment_id))
            .exec(self.db)
            .await?;

        entity::prelude::Comment::update_many()
            .col_expr(
                entity::comment::Column::IsAcceptedAnswer,
                Expr::value(is_accepted_answer),
            )
            .filter(entity::comment::Column::Id.eq(comment_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
