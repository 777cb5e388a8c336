//! User factory for creating test community members and admins.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db, community.id)
///     .role(UserRole::Admin)
///     .email_notifications(false)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    community_id: i32,
    external_auth_id: String,
    username: String,
    email: String,
    role: UserRole,
    email_notifications_enabled: bool,
    admin_email_notifications_enabled: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - external_auth_id: `"user_{id}"`
    /// - username: `"User {id}"`
    /// - email: `"user{id}@example.com"`
    /// - role: `MEMBER`
    /// - both notification flags enabled
    pub fn new(db: &'a DatabaseConnection, community_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            community_id,
            external_auth_id: format!("user_{}", id),
            username: format!("User {}", id),
            email: format!("user{}@example.com", id),
            role: UserRole::Member,
            email_notifications_enabled: true,
            admin_email_notifications_enabled: true,
        }
    }

    /// Sets the upstream authentication id.
    pub fn external_auth_id(mut self, external_auth_id: impl Into<String>) -> Self {
        self.external_auth_id = external_auth_id.into();
        self
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the role.
    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Sets whether comment notifications are delivered.
    pub fn email_notifications(mut self, enabled: bool) -> Self {
        self.email_notifications_enabled = enabled;
        self
    }

    /// Sets whether admin notifications are delivered.
    pub fn admin_email_notifications(mut self, enabled: bool) -> Self {
        self.admin_email_notifications_enabled = enabled;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            community_id: ActiveValue::Set(self.community_id),
            external_auth_id: ActiveValue::Set(self.external_auth_id),
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            role: ActiveValue::Set(self.role),
            email_notifications_enabled: ActiveValue::Set(self.email_notifications_enabled),
            admin_email_notifications_enabled: ActiveValue::Set(
                self.admin_email_notifications_enabled,
            ),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
pub async fn create_user(
    db: &DatabaseConnection,
    community_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, community_id).build().await
}

/// Creates an admin with default values.
pub async fn create_admin(
    db: &DatabaseConnection,
    community_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, community_id)
        .role(UserRole::Admin)
        .build()
        .await
}
