//! Cron jobs started alongside the bot and the HTTP server.

pub mod reconcile;
