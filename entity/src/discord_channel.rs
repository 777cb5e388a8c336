use super::sea_orm_active_enums::PostType;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "discord_channel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub guild_id: String,
    pub name: String,
    pub kind: i32,
    pub should_sync: bool,
    pub default_post_type: PostType,
    pub default_post_tag_id: Option<i32>,
    pub invite_link: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::discord_guild::Entity",
        from = "Column::GuildId",
        to = "super::discord_guild::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DiscordGuild,
    #[sea_orm(
        belongs_to = "super::post_tag::Entity",
        from = "Column::DefaultPostTagId",
        to = "super::post_tag::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    DefaultPostTag,
    #[sea_orm(has_many = "super::discord_thread::Entity")]
    DiscordThread,
}

impl Related<super::discord_guild::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordGuild.def()
    }
}

impl Related<super::discord_thread::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordThread.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
