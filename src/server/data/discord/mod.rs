pub mod attachment;
pub mod channel;
pub mod guild;
pub mod message;
pub mod thread;
pub mod user;

pub use attachment::DiscordAttachmentRepository;
pub use channel::DiscordChannelRepository;
pub use guild::DiscordGuildRepository;
pub use message::DiscordMessageRepository;
pub use thread::DiscordThreadRepository;
pub use user::DiscordUserRepository;

#[cfg(test)]
mod test;
