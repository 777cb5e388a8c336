use crate::server::data::watched_post::WatchedPostRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
