use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::server::{data::post::PostRepository, error::AppError, state::AppState};

pub static HEALTH_TAG: &str = "health";

/// Report whether the service can read from its database.
///
/// # Returns
/// - `200 OK` - At least one post could be read
/// - `404 Not Found` - The database holds no posts
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy"),
        (status = 404, description = "No posts found"),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let status = if PostRepository::new(&state.db).any_exists().await? {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    Ok(status)
}
