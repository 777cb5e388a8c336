//! Domain models and operation parameters for the service layer.
//!
//! Param models are converted from SeaORM entities at the repository boundary with
//! `from_entity`, parsing stored snowflake strings into `u64`. Snapshot types carry the
//! parts of Discord objects the mirroring services need, decoupled from Serenity.

pub mod comment;
pub mod community;
pub mod discord;
pub mod post;
pub mod user;
