use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter,
    QuerySelect, RelationTrait,
};

use crate::server::model::user::UserParam;

pub struct WatchedPostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WatchedPostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a post as watched by a user. Watching twice is a no-op.
    pub async fn watch(&self, post_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::WatchedPost::insert(entity::watched_post::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            user_id: ActiveValue::Set(user_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::watched_post::Column::PostId,
                entity::watched_post::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Gets the users watching a post.
    ///
    /// # Arguments
    /// - `post_id` - Watched post
    /// - `exclude_user_id` - User left out of the result, typically the one who commented
    pub async fn get_watchers(
        &self,
        post_id: i32,
        exclude_user_id: Option<i32>,
    ) -> Result<Vec<UserParam>, DbErr> {
        let mut query = entity::prelude::User::find()
            .join(JoinType::InnerJoin, entity::user::Relation::WatchedPost.def())
            .filter(entity::watched_post::Column::PostId.eq(post_id));

        if let Some(user_id) = exclude_user_id {
            query = query.filter(entity::user::Column::Id.ne(user_id));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(UserParam::from_entity).collect())
    }
}
