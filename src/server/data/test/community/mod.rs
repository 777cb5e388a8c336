use crate::server::data::community::CommunityRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
