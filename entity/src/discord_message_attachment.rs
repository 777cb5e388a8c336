use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "discord_message_attachment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub message_id: Option<String>,
    pub thread_id: Option<String>,
    pub name: String,
    pub content_type: Option<String>,
    pub size: i64,
    pub url: String,
    pub object_key: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::discord_message::Entity",
        from = "Column::MessageId",
        to = "super::discord_message::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DiscordMessage,
    #[sea_orm(
        belongs_to = "super::discord_thread::Entity",
        from = "Column::ThreadId",
        to = "super::discord_thread::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DiscordThread,
}

impl Related<super::discord_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordMessage.def()
    }
}

impl Related<super::discord_thread::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordThread.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
