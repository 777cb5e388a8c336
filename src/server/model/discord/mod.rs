//! Discord mirror models.
//!
//! `*Param` types are stored rows converted at the repository boundary. `*Snapshot`
//! types describe the Discord side of an object as delivered by the gateway or REST
//! API, already reduced to what mirroring needs.

pub mod attachment;
pub mod channel;
pub mod guild;
pub mod message;
pub mod thread;
pub mod user;

pub use attachment::{AttachmentOwner, AttachmentSnapshot, StoredAttachmentParam};
pub use channel::{DiscordChannelParam, ForumChannelSnapshot, ForumTagSnapshot, UpdateChannelSettingsParam};
pub use guild::{DiscordGuildParam, GuildSnapshot};
pub use message::{
    MessageReferenceSnapshot, MessageSnapshot, UpsertMessageParam, DELETED_MESSAGE_CONTENT,
};
pub use thread::{DiscordThreadParam, StarterMessageSnapshot, ThreadSnapshot, UpsertThreadParam};
pub use user::DiscordUserParam;
