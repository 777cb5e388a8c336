pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_community_table;
mod m20250301_000002_create_user_table;
mod m20250301_000003_create_discord_user_table;
mod m20250301_000004_create_post_tag_table;
mod m20250302_000005_create_discord_guild_table;
mod m20250302_000006_create_discord_channel_table;
mod m20250302_000007_create_discord_thread_table;
mod m20250302_000008_create_discord_message_table;
mod m20250302_000009_create_discord_message_attachment_table;
mod m20250303_000010_create_post_table;
mod m20250303_000011_create_comment_table;
mod m20250303_000012_create_post_tag_on_post_table;
mod m20250303_000013_create_watched_post_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_community_table::Migration),
            Box::new(m20250301_000002_create_user_table::Migration),
            Box::new(m20250301_000003_create_discord_user_table::Migration),
            Box::new(m20250301_000004_create_post_tag_table::Migration),
            Box::new(m20250302_000005_create_discord_guild_table::Migration),
            Box::new(m20250302_000006_create_discord_channel_table::Migration),
            Box::new(m20250302_000007_create_discord_thread_table::Migration),
            Box::new(m20250302_000008_create_discord_message_table::Migration),
            Box::new(m20250302_000009_create_discord_message_attachment_table::Migration),
            Box::new(m20250303_000010_create_post_table::Migration),
            Box::new(m20250303_000011_create_comment_table::Migration),
            Box::new(m20250303_000012_create_post_tag_on_post_table::Migration),
            Box::new(m20250303_000013_create_watched_post_table::Migration),
        ]
    }
}
