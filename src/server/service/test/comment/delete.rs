use super::*;

/// Tests deleting a web comment with no replies.
///
/// Expected: the comment is gone and the bot's message is deleted from Discord
#[tokio::test]
async fn deletes_comment_and_bot_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let (community, post) = mirrored_post(db).await?;
    let user = member(db, &community).await?;
    let service = CommentService::new(&ctx);
    let comment = service
        .create(&community, &user, new_comment(&post, "Oops", None))
        .await?;

    service.delete(&community, &user, comment.id).await?;

    assert!(CommentRepository::new(db).find_by_id(comment.id).await?.is_none());
    let deleted = fakes.gateway.deleted.lock().unwrap().clone();
    assert_eq!(deleted, vec![comment.discord_message_id.unwrap()]);

    Ok(())
}

/// Tests deleting a comment that has replies.
///
/// Expected: the comment keeps its row with the deletion notice and Discord is untouched
#[tokio::test]
async fn soft_deletes_comment_with_replies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let (community, post) = mirrored_post(db).await?;
    let user = member(db, &community).await?;
    let service = CommentService::new(&ctx);
    let parent = service
        .create(&community, &user, new_comment(&post, "Question", None))
        .await?;
    service
        .create(&community, &user, new_comment(&post, "Follow-up", Some(parent.id)))
        .await?;

    service.delete(&community, &user, parent.id).await?;

    let stored = CommentRepository::new(db).find_by_id(parent.id).await?.unwrap();
    assert_eq!(stored.content, DELETED_COMMENT_CONTENT);
    assert!(fakes.gateway.deleted.lock().unwrap().is_empty());

    Ok(())
}

/// Tests deleting a comment that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_comment_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let (community, _post) = mirrored_post(db).await?;
    let user = member(db, &community).await?;

    let result = CommentService::new(&ctx).delete(&community, &user, 9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
