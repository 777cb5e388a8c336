//! Paladin Test Utils
//!
//! Shared testing utilities for the Paladin server. Provides a builder for test contexts
//! backed by in-memory SQLite, factories that insert entities with sensible defaults, and
//! Serenity object fixtures deserialized from JSON the way Discord's API returns them.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories (community, users, Discord mirror rows, posts, comments)
//! - **serenity**: Serenity struct fixtures (users, attachments, messages)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn mirrors_thread() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_forum_tables().build().await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
