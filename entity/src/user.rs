use super::sea_orm_active_enums::UserRole;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub community_id: i32,
    pub external_auth_id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub email_notifications_enabled: bool,
    pub admin_email_notifications_enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::community::Entity",
        from = "Column::CommunityId",
        to = "super::community::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Community,
    #[sea_orm(has_many = "super::watched_post::Entity")]
    WatchedPost,
}

impl Related<super::community::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Community.def()
    }
}

impl Related<super::watched_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WatchedPost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
