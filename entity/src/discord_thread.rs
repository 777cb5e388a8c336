use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "discord_thread")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub channel_id: String,
    pub title: String,
    pub starter_message_id: String,
    #[sea_orm(column_type = "Text")]
    pub starter_message_content: String,
    pub author_id: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::discord_channel::Entity",
        from = "Column::ChannelId",
        to = "super::discord_channel::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DiscordChannel,
    #[sea_orm(
        belongs_to = "super::discord_user::Entity",
        from = "Column::AuthorId",
        to = "super::discord_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DiscordUser,
    #[sea_orm(has_many = "super::discord_message::Entity")]
    DiscordMessage,
    #[sea_orm(has_one = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::discord_message_attachment::Entity")]
    DiscordMessageAttachment,
}

impl Related<super::discord_channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordChannel.def()
    }
}

impl Related<super::discord_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordUser.def()
    }
}

impl Related<super::discord_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordMessage.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
