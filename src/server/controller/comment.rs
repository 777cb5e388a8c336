use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, MarkAcceptedDto, UpdateCommentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::comment::NewCommentParam,
        service::comment::CommentService, state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Create a comment on a post.
///
/// When the post mirrors a Discord thread, the bot posts the comment to the thread
/// quoting the commenter, replying to the parent comment's message if there is one.
///
/// # Access Control
/// - Any member of the community
///
/// # Arguments
/// - `payload` - Post, content and optional parent comment
///
/// # Returns
/// - `201 Created` - The created comment
/// - `400 Bad Request` - Empty content
/// - `401 Unauthorized` - Missing identity or user not in the community
/// - `404 Not Found` - Post or parent comment not found
#[utoipa::path(
    post,
    path = "/internal/comment",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 401, description = "Missing identity or user not in community", body = ErrorDto),
        (status = 404, description = "Post or parent comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let comment = CommentService::new(&state.sync)
        .create(
            &identity.community,
            &identity.user,
            NewCommentParam::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Update a comment's content.
///
/// # Access Control
/// - The comment's author or a community admin
///
/// # Returns
/// - `200 OK` - The updated comment
/// - `403 Forbidden` - Neither the author nor an admin
/// - `404 Not Found` - Comment not found in the community
#[utoipa::path(
    patch,
    path = "/internal/comment/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 401, description = "Missing identity or user not in community", body = ErrorDto),
        (status = 403, description = "Not the author or an admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(comment_id): Path<i32>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let comment = CommentService::new(&state.sync)
        .update(
            &identity.community,
            &identity.user,
            comment_id,
            payload.content,
        )
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// Comments with replies keep their place in the thread with their content replaced.
///
/// # Access Control
/// - The comment's author or a community admin
///
/// # Returns
/// - `204 No Content` - Comment deleted
/// - `403 Forbidden` - Neither the author nor an admin
/// - `404 Not Found` - Comment not found in the community
#[utoipa::path(
    delete,
    path = "/internal/comment/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 401, description = "Missing identity or user not in community", body = ErrorDto),
        (status = 403, description = "Not the author or an admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    CommentService::new(&state.sync)
        .delete(&identity.community, &identity.user, comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Mark or unmark a comment as the accepted answer of its question.
///
/// # Access Control
/// - The post's author or a community admin
///
/// # Returns
/// - `204 No Content` - Accepted answer updated
/// - `400 Bad Request` - The post is not a question
/// - `403 Forbidden` - Neither the post author nor an admin
/// - `404 Not Found` - Comment not found in the community
#[utoipa::path(
    post,
    path = "/internal/comment/mark-as-accepted/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    request_body = MarkAcceptedDto,
    responses(
        (status = 204, description = "Successfully updated accepted answer"),
        (status = 400, description = "Post is not a question", body = ErrorDto),
        (status = 401, description = "Missing identity or user not in community", body = ErrorDto),
        (status = 403, description = "Not the post author or an admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_as_accepted(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(comment_id): Path<i32>,
    Json(payload): Json<MarkAcceptedDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    CommentService::new(&state.sync)
        .mark_accepted(
            &identity.community,
            &identity.user,
            comment_id,
            payload.is_accepted_answer,
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
