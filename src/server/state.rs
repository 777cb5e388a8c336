//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request handler
//! through Axum's state extraction. It holds the database pool and the sync context the
//! comment and Discord routes use to reach Discord and object storage.

use sea_orm::DatabaseConnection;

use crate::server::service::discord::SyncContext;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `SyncContext` holds `Arc`s to the gateway, storage and notifier
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Discord mirroring dependencies.
    ///
    /// Web comments are mirrored into Discord threads and channel setting changes
    /// trigger background channel syncs through it.
    pub sync: SyncContext,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `sync` - Discord mirroring context shared with the bot
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, sync: SyncContext) -> Self {
        Self { db, sync }
    }
}
