use super::*;

use crate::server::{
    data::discord::DiscordAttachmentRepository, model::discord::AttachmentOwner,
};
