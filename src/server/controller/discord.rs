use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        discord::{DiscordChannelDto, InviteLinkDto, UpdateDiscordChannelDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::discord::UpdateChannelSettingsParam,
        service::discord::{DiscordChannelService, DiscordGuildService},
        state::AppState,
    },
};

/// Tag for grouping Discord integration endpoints in OpenAPI documentation
pub static DISCORD_TAG: &str = "discord";

/// Get the mirrored forum channels of the community's Discord server.
///
/// Channels are ordered by name and carry the number of threads mirrored from each.
/// Empty when the community has not linked a Discord server.
///
/// # Access Control
/// - `Admin` - Only community admins can view channel settings
///
/// # Returns
/// - `200 OK` - List of forum channels
/// - `401 Unauthorized` - Missing community or user identity
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/internal/discord/channel",
    tag = DISCORD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved channels", body = Vec<DiscordChannelDto>),
        (status = 401, description = "Missing community or user identity", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_channels(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let channels = DiscordChannelService::new(&state.sync)
        .list_for_community(identity.community.id)
        .await?;

    let dtos: Vec<DiscordChannelDto> = channels
        .into_iter()
        .map(|(channel, thread_count)| channel.into_dto(thread_count))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Update the sync settings of a forum channel.
///
/// Starts a background sync of the channel. Enabling sync creates a permanent
/// invite for the channel when it has none.
///
/// # Access Control
/// - `Admin` - Only community admins can change channel settings
///
/// # Arguments
/// - `channel_id` - Discord channel ID
/// - `payload` - New sync settings
///
/// # Returns
/// - `200 OK` - The channel with its new settings
/// - `401 Unauthorized` - Missing community or user identity
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Channel is not a forum channel of the community's server
/// - `500 Internal Server Error` - Database or Discord error
#[utoipa::path(
    patch,
    path = "/internal/discord/channel/{channel_id}",
    tag = DISCORD_TAG,
    params(
        ("channel_id" = u64, Path, description = "Discord channel ID")
    ),
    request_body = UpdateDiscordChannelDto,
    responses(
        (status = 200, description = "Successfully updated channel", body = DiscordChannelDto),
        (status = 401, description = "Missing community or user identity", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_channel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(channel_id): Path<u64>,
    Json(payload): Json<UpdateDiscordChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let channel_service = DiscordChannelService::new(&state.sync);
    let channel = channel_service
        .update_settings(
            identity.community.id,
            channel_id,
            UpdateChannelSettingsParam::from_dto(payload),
        )
        .await?;

    let thread_count = channel_service
        .list_for_community(identity.community.id)
        .await?
        .into_iter()
        .find(|(listed, _)| listed.channel_id == channel.channel_id)
        .map(|(_, count)| count)
        .unwrap_or(0);

    Ok((StatusCode::OK, Json(channel.into_dto(thread_count))))
}

/// Get an invite link to the community's Discord server.
///
/// # Access Control
/// - Any request naming a known community
///
/// # Returns
/// - `200 OK` - The first stored invite, or `null` when none exists
/// - `401 Unauthorized` - Missing community identity
/// - `404 Not Found` - Unknown community
#[utoipa::path(
    get,
    path = "/internal/discord/invite-link",
    tag = DISCORD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved invite link", body = InviteLinkDto),
        (status = 401, description = "Missing community identity", body = ErrorDto),
        (status = 404, description = "Community not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invite_link(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let community = AuthGuard::new(&state.db, &headers).community().await?;

    let invite_link = DiscordChannelService::new(&state.sync)
        .invite_link(community.id)
        .await?;

    Ok((StatusCode::OK, Json(InviteLinkDto { invite_link })))
}

/// Unlink the community's Discord server.
///
/// Removes the server and everything mirrored from it.
///
/// # Access Control
/// - `Admin` - Only community admins can unlink the server
///
/// # Returns
/// - `204 No Content` - Server unlinked
/// - `404 Not Found` - The community has no linked server
#[utoipa::path(
    delete,
    path = "/internal/discord/guild",
    tag = DISCORD_TAG,
    responses(
        (status = 204, description = "Successfully unlinked server"),
        (status = 401, description = "Missing community or user identity", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "No linked server", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlink_guild(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let unlinked = DiscordGuildService::new(&state.sync)
        .unlink(identity.community.id)
        .await?;

    if !unlinked {
        return Err(AppError::NotFound(
            "Community has no linked Discord server".to_string(),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
