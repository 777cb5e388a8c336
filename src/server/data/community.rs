use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

use crate::server::model::community::CommunityParam;

pub struct CommunityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommunityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, community_id: i32) -> Result<Option<CommunityParam>, DbErr> {
        let entity = entity::prelude::Community::find_by_id(community_id)
            .one(self.db)
            .await?;

        Ok(entity.map(CommunityParam::from_entity))
    }

    /// Finds a community by its domain, e.g. `acme.community.trypaladin.com`.
    pub async fn find_by_domain(&self, domain: &str) -> Result<Option<CommunityParam>, DbErr> {
        let entity = entity::prelude::Community::find()
            .filter(entity::community::Column::Domain.eq(domain))
            .one(self.db)
            .await?;

        Ok(entity.map(CommunityParam::from_entity))
    }

    /// Gets the domain of every community.
    ///
    /// Used to build the CORS allow-list.
    pub async fn get_domains(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Community::find()
            .select_only()
            .column(entity::community::Column::Domain)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
