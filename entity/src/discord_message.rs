use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "discord_message")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub thread_id: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author_id: String,
    pub parent_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::discord_thread::Entity",
        from = "Column::ThreadId",
        to = "super::discord_thread::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DiscordThread,
    #[sea_orm(
        belongs_to = "super::discord_user::Entity",
        from = "Column::AuthorId",
        to = "super::discord_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DiscordUser,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Parent,
    #[sea_orm(has_one = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::discord_message_attachment::Entity")]
    DiscordMessageAttachment,
}

impl Related<super::discord_thread::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordThread.def()
    }
}

impl Related<super::discord_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordUser.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::discord_message_attachment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordMessageAttachment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
