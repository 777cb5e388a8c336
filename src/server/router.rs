use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, MarkAcceptedDto, UpdateCommentDto},
        discord::{DiscordChannelDto, InviteLinkDto, PostTypeDto, UpdateDiscordChannelDto},
    },
    server::{
        controller::{
            comment::{create_comment, delete_comment, mark_as_accepted, update_comment},
            discord::{get_channels, get_invite_link, unlink_guild, update_channel},
            health::health,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::health::health,
        crate::server::controller::discord::get_channels,
        crate::server::controller::discord::update_channel,
        crate::server::controller::discord::get_invite_link,
        crate::server::controller::discord::unlink_guild,
        crate::server::controller::comment::create_comment,
        crate::server::controller::comment::update_comment,
        crate::server::controller::comment::delete_comment,
        crate::server::controller::comment::mark_as_accepted,
    ),
    components(schemas(
        ErrorDto,
        CommentDto,
        CreateCommentDto,
        UpdateCommentDto,
        MarkAcceptedDto,
        DiscordChannelDto,
        UpdateDiscordChannelDto,
        InviteLinkDto,
        PostTypeDto,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "discord", description = "Discord server and forum channel settings"),
        (name = "comment", description = "Comments mirrored to Discord threads"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/internal/discord/channel", get(get_channels))
        .route("/internal/discord/channel/{channel_id}", patch(update_channel))
        .route("/internal/discord/invite-link", get(get_invite_link))
        .route("/internal/discord/guild", delete(unlink_guild))
        .route("/internal/comment", post(create_comment))
        .route(
            "/internal/comment/{comment_id}",
            patch(update_comment).delete(delete_comment),
        )
        .route(
            "/internal/comment/mark-as-accepted/{comment_id}",
            post(mark_as_accepted),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
