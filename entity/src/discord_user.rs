use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "discord_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub username: String,
    pub discriminator: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::discord_thread::Entity")]
    DiscordThread,
    #[sea_orm(has_many = "super::discord_message::Entity")]
    DiscordMessage,
}

impl Related<super::discord_thread::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordThread.def()
    }
}

impl Related<super::discord_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordMessage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
