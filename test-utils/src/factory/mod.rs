//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization and a
//! `create_*` convenience function for quick default creation. Factories take the ids of the
//! rows they reference; `helpers` creates whole dependency chains at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let community = factory::create_community(&db).await?;
//!     let user = factory::create_user(&db, community.id).await?;
//!
//!     let mirrored = factory::helpers::create_mirrored_thread(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let channel = factory::discord_channel::DiscordChannelFactory::new(&db, &guild.id)
//!     .should_sync(false)
//!     .default_post_type(PostType::Feedback)
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod community;
pub mod discord_channel;
pub mod discord_guild;
pub mod discord_message;
pub mod discord_thread;
pub mod discord_user;
pub mod helpers;
pub mod post;
pub mod post_tag;
pub mod user;

pub use comment::create_comment;
pub use community::create_community;
pub use discord_channel::create_channel;
pub use discord_guild::create_guild;
pub use discord_message::create_message;
pub use discord_thread::create_thread;
pub use discord_user::create_discord_user;
pub use post::create_post;
pub use post_tag::create_post_tag;
pub use user::{create_admin, create_user};
