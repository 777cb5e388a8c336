//! Test fixtures for creating Serenity API objects.
//!
//! These functions create valid Serenity structs by deserializing JSON shaped like
//! Discord's API payloads, so conversion code can be tested against the same structures
//! the gateway delivers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_user};
//!
//! let author = create_test_user(200, "rin", false);
//! let message = create_test_message(300, 100, &author, "hello");
//! ```
//!
//! # Available Fixtures
//!
//! - `user::create_test_user` - Serenity `User` objects
//! - `channel::create_test_channel` - Serenity `GuildChannel` channels and threads
//! - `guild::create_test_guild` - Cached `Guild` objects with channels and threads
//! - `attachment::create_test_attachment` - Serenity `Attachment` objects
//! - `message::create_test_message` - Serenity `Message` objects
//! - `message::MessageBuilder` - Messages with guild, attachments, replies and kinds

pub mod attachment;
pub mod channel;
pub mod guild;
pub mod message;
pub mod user;

pub use attachment::create_test_attachment;
pub use channel::create_test_channel;
pub use guild::create_test_guild;
pub use message::{create_test_message, MessageBuilder};
pub use user::create_test_user;
