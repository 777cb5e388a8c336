use entity::sea_orm_active_enums::{FeedbackStatus, PostType, QuestionStatus};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository},
    error::{auth::AuthError, AppError},
    model::{
        comment::{NewCommentParam, DELETED_COMMENT_CONTENT},
        community::CommunityParam,
        post::PostParam,
        user::UserParam,
    },
    service::{
        comment::{discord_comment_content, CommentService},
        discord::fake::Fakes,
    },
};

mod create;
mod delete;

/// A post mirroring a Discord thread, with its community.
async fn mirrored_post(db: &DatabaseConnection) -> Result<(CommunityParam, PostParam), AppError> {
    let mirrored = factory::helpers::create_mirrored_thread(db).await?;
    let post = PostParam::from_entity(mirrored.post)?;

    Ok((CommunityParam::from_entity(mirrored.community), post))
}

/// A web-only question written by `author`.
async fn web_question(
    db: &DatabaseConnection,
    community: &CommunityParam,
    author: &UserParam,
    status: QuestionStatus,
) -> Result<PostParam, AppError> {
    let post = factory::post::PostFactory::new(db, community.id)
        .author_id(Some(author.id))
        .question_status(Some(status))
        .build()
        .await?;

    Ok(PostParam::from_entity(post)?)
}

async fn member(db: &DatabaseConnection, community: &CommunityParam) -> Result<UserParam, AppError> {
    Ok(UserParam::from_entity(
        factory::create_user(db, community.id).await?,
    ))
}

async fn admin(db: &DatabaseConnection, community: &CommunityParam) -> Result<UserParam, AppError> {
    Ok(UserParam::from_entity(
        factory::create_admin(db, community.id).await?,
    ))
}

fn new_comment(post: &PostParam, content: &str, parent_id: Option<i32>) -> NewCommentParam {
    NewCommentParam {
        post_id: post.id,
        content: content.to_string(),
        parent_id,
    }
}
