pub use super::comment::Entity as Comment;
pub use super::community::Entity as Community;
pub use super::discord_channel::Entity as DiscordChannel;
pub use super::discord_guild::Entity as DiscordGuild;
pub use super::discord_message::Entity as DiscordMessage;
pub use super::discord_message_attachment::Entity as DiscordMessageAttachment;
pub use super::discord_thread::Entity as DiscordThread;
pub use super::discord_user::Entity as DiscordUser;
pub use super::post::Entity as Post;
pub use super::post_tag::Entity as PostTag;
pub use super::post_tag_on_post::Entity as PostTagOnPost;
pub use super::user::Entity as User;
pub use super::watched_post::Entity as WatchedPost;
