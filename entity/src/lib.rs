//! SeaORM entities for the Paladin forum and its Discord mirror.

pub mod prelude;

pub mod comment;
pub mod community;
pub mod discord_channel;
pub mod discord_guild;
pub mod discord_message;
pub mod discord_message_attachment;
pub mod discord_thread;
pub mod discord_user;
pub mod post;
pub mod post_tag;
pub mod post_tag_on_post;
pub mod sea_orm_active_enums;
pub mod user;
pub mod watched_post;
