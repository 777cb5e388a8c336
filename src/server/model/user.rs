//! Forum user models.

use entity::sea_orm_active_enums::UserRole;

/// A forum user belonging to one community.
#[derive(Debug, Clone, PartialEq)]
pub struct UserParam {
    pub id: i32,
    pub community_id: i32,
    /// Identity assigned by the upstream authentication provider.
    pub external_auth_id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    /// Receives notifications for watched posts.
    pub email_notifications_enabled: bool,
    /// Receives notifications addressed to community admins.
    pub admin_email_notifications_enabled: bool,
}

impl UserParam {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            community_id: entity.community_id,
            external_auth_id: entity.external_auth_id,
            username: entity.username,
            email: entity.email,
            role: entity.role,
            email_notifications_enabled: entity.email_notifications_enabled,
            admin_email_notifications_enabled: entity.admin_email_notifications_enabled,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
