use super::*;

/// Tests commenting on a post that mirrors a Discord thread.
///
/// Expected: the bot posts the quoted comment to the thread and the comment keeps its id
#[tokio::test]
async fn posts_comment_to_mirrored_thread() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let (community, post) = mirrored_post(db).await?;
    let user = member(db, &community).await?;

    let comment = CommentService::new(&ctx)
        .create(&community, &user, new_comment(&post, "Try restarting", None))
        .await?;

    let sent = fakes.gateway.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(Some(sent[0].thread_id), post.discord_thread_id);
    assert_eq!(
        sent[0].content,
        discord_comment_content(&community.domain, post.id, &user.username, "Try restarting")
    );
    assert_eq!(sent[0].reply_to, None);
    assert_eq!(comment.discord_message_id, Some(sent[0].message_id));
    assert_eq!(comment.author_id, Some(user.id));
    assert_eq!(comment.content, "Try restarting");

    Ok(())
}

/// Tests replying to a comment that has a Discord message.
///
/// Expected: the bot's message replies to the parent's message
#[tokio::test]
async fn reply_targets_parent_discord_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let (community, post) = mirrored_post(db).await?;
    let user = member(db, &community).await?;
    let service = CommentService::new(&ctx);

    let parent = service
        .create(&community, &user, new_comment(&post, "First", None))
        .await?;
    let reply = service
        .create(&community, &user, new_comment(&post, "Second", Some(parent.id)))
        .await?;

    let sent = fakes.gateway.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].reply_to, parent.discord_message_id);
    assert_eq!(reply.parent_id, Some(parent.id));

    Ok(())
}

/// Tests an admin answering a question that waits on the admins.
///
/// Expected: the question moves to AWAITING_USER_RESPONSE
#[tokio::test]
async fn admin_reply_hands_question_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let (community, post) = mirrored_post(db).await?;
    let admin = admin(db, &community).await?;

    CommentService::new(&ctx)
        .create(&community, &admin, new_comment(&post, "Which version?", None))
        .await?;

    let post = PostRepository::new(db).find_by_id(post.id).await?.unwrap();
    assert_eq!(
        post.question_status,
        Some(QuestionStatus::AwaitingUserResponse)
    );

    Ok(())
}

/// Tests the post author answering a question that waits on them.
///
/// Expected: the question returns to AWAITING_ADMIN_RESPONSE and the admin is notified
#[tokio::test]
async fn author_reply_returns_question_to_admins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let community = CommunityParam::from_entity(factory::create_community(db).await?);
    let author = member(db, &community).await?;
    let admin = admin(db, &community).await?;
    let post = web_question(db, &community, &author, QuestionStatus::AwaitingUserResponse).await?;

    CommentService::new(&ctx)
        .create(&community, &author, new_comment(&post, "Still broken", None))
        .await?;

    let post = PostRepository::new(db).find_by_id(post.id).await?.unwrap();
    assert_eq!(
        post.question_status,
        Some(QuestionStatus::AwaitingAdminResponse)
    );
    assert_eq!(fakes.notifier.admin_notifications(), vec![(admin.id, post.id)]);
    assert!(fakes.gateway.sent().is_empty());

    Ok(())
}

/// Tests an admin commenting on their own post.
///
/// Expected: the status is untouched and nobody is notified
#[tokio::test]
async fn admin_on_own_post_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let community = CommunityParam::from_entity(factory::create_community(db).await?);
    let admin = admin(db, &community).await?;
    let post = web_question(db, &community, &admin, QuestionStatus::AwaitingAdminResponse).await?;

    CommentService::new(&ctx)
        .create(&community, &admin, new_comment(&post, "Note to self", None))
        .await?;

    let post = PostRepository::new(db).find_by_id(post.id).await?.unwrap();
    assert_eq!(
        post.question_status,
        Some(QuestionStatus::AwaitingAdminResponse)
    );
    assert!(fakes.notifier.admin_notifications().is_empty());
    assert!(fakes.notifier.comment_notifications().is_empty());

    Ok(())
}

/// Tests watcher notifications after a second member comments.
///
/// Expected: the earlier commenter is notified, the new commenter is not
#[tokio::test]
async fn notifies_watchers_except_commenter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let (community, post) = mirrored_post(db).await?;
    let first = member(db, &community).await?;
    let second = member(db, &community).await?;
    let service = CommentService::new(&ctx);

    service
        .create(&community, &first, new_comment(&post, "Me too", None))
        .await?;
    let comment = service
        .create(&community, &second, new_comment(&post, "Same", None))
        .await?;

    assert_eq!(
        fakes.notifier.comment_notifications(),
        vec![(first.id, comment.id)]
    );

    Ok(())
}

/// Tests comments with no content or on another community's post.
///
/// Expected: Err(BadRequest) and Err(NotFound), nothing sent to Discord
#[tokio::test]
async fn rejects_empty_content_and_foreign_posts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let (community, post) = mirrored_post(db).await?;
    let other = CommunityParam::from_entity(factory::create_community(db).await?);
    let user = member(db, &other).await?;
    let service = CommentService::new(&ctx);

    let empty = service
        .create(&community, &user, new_comment(&post, "   ", None))
        .await;
    let foreign = service
        .create(&other, &user, new_comment(&post, "Hello", None))
        .await;

    assert!(matches!(empty, Err(AppError::BadRequest(_))));
    assert!(matches!(foreign, Err(AppError::NotFound(_))));
    assert!(fakes.gateway.sent().is_empty());

    Ok(())
}
