use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The `x-community-id` header is missing or not a community id.
    #[error("Request is missing a valid community identity")]
    MissingCommunity,

    /// The `x-user-id` header is missing.
    #[error("Request is missing a user identity")]
    MissingUser,

    /// The community named by the request does not exist.
    #[error("Community {0} not found")]
    CommunityNotFound(i32),

    /// The authenticated external id has no user in the community.
    #[error("User {external_id} is not a member of community {community_id}")]
    UserNotInCommunity {
        external_id: String,
        community_id: i32,
    },

    /// The user lacks the permission required for the operation.
    ///
    /// # Fields
    /// - User id
    /// - Reason logged server-side
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingCommunity` / `MissingUser` / `UserNotInCommunity` → 401 Unauthorized
/// - `CommunityNotFound` → 404 Not Found
/// - `AccessDenied` → 403 Forbidden
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingCommunity | Self::MissingUser | Self::UserNotInCommunity { .. } => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::CommunityNotFound(_) => (StatusCode::NOT_FOUND, "Community not found"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Forbidden"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
