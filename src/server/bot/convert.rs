//! Conversion of Serenity models into the snapshots the mirroring services consume.

use serenity::all::{Attachment, ChannelType, GuildChannel, Message, MessageType, PartialGuild, User};

use crate::server::model::discord::{
    AttachmentSnapshot, DiscordUserParam, ForumChannelSnapshot, ForumTagSnapshot, GuildSnapshot,
    MessageReferenceSnapshot, MessageSnapshot, StarterMessageSnapshot, ThreadSnapshot,
};

pub fn discord_user(user: &User) -> DiscordUserParam {
    DiscordUserParam {
        user_id: user.id.get(),
        username: user.name.clone(),
        discriminator: user.discriminator.map(|discriminator| format!("{:04}", discriminator.get())),
        avatar: user.avatar_url(),
    }
}

pub fn guild(guild: &PartialGuild) -> GuildSnapshot {
    GuildSnapshot {
        guild_id: guild.id.get(),
        name: guild.name.clone(),
        icon: guild.icon_url(),
    }
}

/// Converts a guild channel if it is a forum channel.
pub fn forum_channel(channel: &GuildChannel) -> Option<ForumChannelSnapshot> {
    if channel.kind != ChannelType::Forum {
        return None;
    }

    Some(ForumChannelSnapshot {
        channel_id: channel.id.get(),
        guild_id: channel.guild_id.get(),
        name: channel.name.clone(),
        kind: i32::from(u8::from(channel.kind)),
        available_tags: channel
            .available_tags
            .iter()
            .map(|tag| ForumTagSnapshot {
                tag_id: tag.id.get(),
                name: tag.name.clone(),
            })
            .collect(),
    })
}

pub fn attachment(attachment: &Attachment) -> AttachmentSnapshot {
    AttachmentSnapshot {
        attachment_id: attachment.id.get(),
        filename: attachment.filename.clone(),
        content_type: attachment.content_type.clone(),
        size: u64::from(attachment.size),
        url: attachment.url.clone(),
    }
}

/// Discord marks joins, pins, thread renames and the like with their own types.
/// Plain messages, replies and responses to other bots' commands are authored content.
pub fn is_system_message(message: &Message) -> bool {
    !matches!(
        message.kind,
        MessageType::Regular
            | MessageType::InlineReply
            | MessageType::ChatInputCommand
            | MessageType::ContextMenuCommand
    )
}

/// Converts a message of a thread.
///
/// `forum_channel_id` is the forum the thread belongs to, `None` when the message is
/// not in a forum thread or the caller does not know yet.
pub fn message(message: &Message, forum_channel_id: Option<u64>) -> MessageSnapshot {
    MessageSnapshot {
        message_id: message.id.get(),
        channel_id: message.channel_id.get(),
        guild_id: message.guild_id.map(|guild_id| guild_id.get()),
        forum_channel_id,
        author: discord_user(&message.author),
        content: message.content.clone(),
        created_at: message.timestamp.to_utc(),
        edited_at: message.edited_timestamp.map(|edited| edited.to_utc()),
        is_system: is_system_message(message),
        attachments: message.attachments.iter().map(attachment).collect(),
        reference: message
            .referenced_message
            .as_deref()
            .map(|referenced| MessageReferenceSnapshot {
                message_id: referenced.id.get(),
                author_id: referenced.author.id.get(),
                is_system: is_system_message(referenced),
            }),
    }
}

pub fn starter_message(message: &Message) -> StarterMessageSnapshot {
    StarterMessageSnapshot {
        message_id: message.id.get(),
        author: discord_user(&message.author),
        content: message.content.clone(),
        created_at: message.timestamp.to_utc(),
        edited_at: message.edited_timestamp.map(|edited| edited.to_utc()),
        attachments: message.attachments.iter().map(attachment).collect(),
    }
}

pub fn thread(thread: &GuildChannel, channel: ForumChannelSnapshot, starter: &Message) -> ThreadSnapshot {
    ThreadSnapshot {
        thread_id: thread.id.get(),
        guild_id: thread.guild_id.get(),
        title: thread.name.clone(),
        applied_tags: thread.applied_tags.iter().map(|tag| tag.get()).collect(),
        channel,
        starter: starter_message(starter),
    }
}
