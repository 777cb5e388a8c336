//! Discord bot integration.
//!
//! The bot keeps the forum mirror current from the gateway event stream and serves
//! the `/connect` and `/sync` slash commands. It is initialized during server startup
//! and runs in a separate tokio task to avoid blocking the HTTP server. The
//! [`SyncContext`](crate::server::service::discord::SyncContext) built here, with its
//! [`gateway::SerenityGateway`], is shared with the HTTP routes and the reconciliation
//! job so they reach Discord through the same REST client.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild, channel and thread events
//! - `GUILD_MESSAGES` - Message create, update and delete events
//! - `MESSAGE_CONTENT` - Message bodies (privileged intent)
//! - `GUILD_MEMBERS` - Member join and update events (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS` - Reaction events
//!
//! Privileged intents must be explicitly enabled in the Discord Developer Portal for the
//! bot application.

pub mod command;
pub mod convert;
pub mod gateway;
pub mod handler;
pub mod start;
