//! Community factory for creating test tenants.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test communities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let community = CommunityFactory::new(&db)
///     .domain("help.example.com")
///     .build()
///     .await?;
/// ```
pub struct CommunityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    domain: String,
}

impl<'a> CommunityFactory<'a> {
    /// Creates a new CommunityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Community {id}"`
    /// - domain: `"community-{id}.example.com"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Community {}", id),
            domain: format!("community-{}.example.com", id),
        }
    }

    /// Sets the community name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the community domain.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Builds and inserts the community entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::community::Model)` - Created community entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::community::Model, DbErr> {
        entity::community::ActiveModel {
            name: ActiveValue::Set(self.name),
            domain: ActiveValue::Set(self.domain),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a community with default values.
///
/// Shorthand for `CommunityFactory::new(db).build().await`.
pub async fn create_community(db: &DatabaseConnection) -> Result<entity::community::Model, DbErr> {
    CommunityFactory::new(db).build().await
}
