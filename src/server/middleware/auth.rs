//! Identity guard for the internal routes.
//!
//! Authentication happens upstream: the web app forwards the tenant in
//! `x-community-id` and the authenticated account in `x-user-id`. The guard resolves
//! both against the database and checks the permissions a route requires.

use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{community::CommunityRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{community::CommunityParam, user::UserParam},
};

pub const COMMUNITY_ID_HEADER: &str = "x-community-id";
pub const USER_ID_HEADER: &str = "x-user-id";

pub enum Permission {
    Admin,
}

/// The community a request targets and the member making it.
pub struct Identity {
    pub community: CommunityParam,
    pub user: UserParam,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the community of the request without requiring a user.
    pub async fn community(&self) -> Result<CommunityParam, AppError> {
        let community_id = header(self.headers, COMMUNITY_ID_HEADER)
            .and_then(|value| value.parse::<i32>().ok())
            .ok_or(AuthError::MissingCommunity)?;

        let Some(community) = CommunityRepository::new(self.db)
            .find_by_id(community_id)
            .await?
        else {
            return Err(AuthError::CommunityNotFound(community_id).into());
        };

        Ok(community)
    }

    /// Resolves the community and its member, then checks every permission.
    ///
    /// # Returns
    /// - `Ok(Identity)` - The member holds all permissions
    /// - `Err(AuthError::MissingCommunity | MissingUser)` - Identity headers absent
    /// - `Err(AuthError::CommunityNotFound)` - Unknown community
    /// - `Err(AuthError::UserNotInCommunity)` - The account is not a member
    /// - `Err(AuthError::AccessDenied)` - A permission is not held
    pub async fn require(&self, permissions: &[Permission]) -> Result<Identity, AppError> {
        let community = self.community().await?;

        let external_id = header(self.headers, USER_ID_HEADER).ok_or(AuthError::MissingUser)?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_external_id(community.id, external_id)
            .await?
        else {
            return Err(AuthError::UserNotInCommunity {
                external_id: external_id.to_string(),
                community_id: community.id,
            }
            .into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("admin permission required in community {}", community.id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(Identity { community, user })
    }
}

fn header<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
