use super::sea_orm_active_enums::{FeedbackStatus, PostType, QuestionStatus};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub community_id: i32,
    pub author_id: Option<i32>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub post_type: PostType,
    pub question_status: Option<QuestionStatus>,
    pub feedback_status: Option<FeedbackStatus>,
    pub private: bool,
    #[sea_orm(unique)]
    pub discord_thread_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::discord_thread::Entity",
        from = "Column::DiscordThreadId",
        to = "super::discord_thread::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DiscordThread,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::post_tag_on_post::Entity")]
    PostTagOnPost,
    #[sea_orm(has_many = "super::watched_post::Entity")]
    WatchedPost,
}

impl Related<super::community::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Community.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::discord_thread::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordThread.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::watched_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WatchedPost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
