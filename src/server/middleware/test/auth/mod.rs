use axum::http::{HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission, COMMUNITY_ID_HEADER, USER_ID_HEADER},
};

mod community;
mod require;

fn headers(community_id: Option<&str>, user_id: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(community_id) = community_id {
        headers.insert(COMMUNITY_ID_HEADER, HeaderValue::from_str(community_id).unwrap());
    }
    if let Some(user_id) = user_id {
        headers.insert(USER_ID_HEADER, HeaderValue::from_str(user_id).unwrap());
    }
    headers
}
