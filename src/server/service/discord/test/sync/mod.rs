use super::*;

use crate::server::{
    data::discord::DiscordUserRepository,
    model::discord::DiscordUserParam,
    service::discord::sync::{MEMBER_PAGE_SIZE, MESSAGE_PAGE_SIZE},
};

mod sync_channel;
mod sync_guild;
