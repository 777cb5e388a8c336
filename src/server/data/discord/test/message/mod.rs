use crate::server::{data::discord::DiscordMessageRepository, model::discord::UpsertMessageParam};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_replies;
mod upsert;
