use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Tables are generated from SeaORM entities, so foreign keys and cascades
/// match the entity relations.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Community)
///     .with_table(DiscordGuild)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables are created in the order they were added, so tables with foreign keys
    /// should be added after their referenced tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the community, user, tag and Discord guild/channel/user tables.
    ///
    /// Use this when testing guild linkage or channel settings without touching
    /// mirrored threads.
    pub fn with_community_tables(self) -> Self {
        self.with_table(Community)
            .with_table(User)
            .with_table(PostTag)
            .with_table(DiscordGuild)
            .with_table(DiscordChannel)
            .with_table(DiscordUser)
    }

    /// Adds every table of the forum and its Discord mirror in dependency order.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_forum_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_forum_tables(self) -> Self {
        self.with_community_tables()
            .with_table(DiscordThread)
            .with_table(DiscordMessage)
            .with_table(DiscordMessageAttachment)
            .with_table(Post)
            .with_table(Comment)
            .with_table(PostTagOnPost)
            .with_table(WatchedPost)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
