use crate::server::{data::discord::DiscordGuildRepository, model::discord::GuildSnapshot};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_stale;
mod update;
