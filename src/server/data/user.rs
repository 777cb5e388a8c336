//! User data repository for database operations.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::user::UserParam;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<UserParam>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(entity.map(UserParam::from_entity))
    }

    /// Finds the user an upstream identity maps to within a community.
    ///
    /// # Arguments
    /// - `community_id` - Community the request is scoped to
    /// - `external_auth_id` - Identity from the `x-user-id` header
    ///
    /// # Returns
    /// - `Ok(Some(UserParam))` - User found
    /// - `Ok(None)` - The identity has no account in this community
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_external_id(
        &self,
        community_id: i32,
        external_auth_id: &str,
    ) -> Result<Option<UserParam>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::CommunityId.eq(community_id))
            .filter(entity::user::Column::ExternalAuthId.eq(external_auth_id))
            .one(self.db)
            .await?;

        Ok(entity.map(UserParam::from_entity))
    }

    pub async fn get_admins(&self, community_id: i32) -> Result<Vec<UserParam>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::CommunityId.eq(community_id))
            .filter(entity::user::Column::Role.eq(UserRole::Admin))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserParam::from_entity).collect())
    }
}
