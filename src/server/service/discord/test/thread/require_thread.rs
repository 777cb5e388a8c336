use super::*;

/// Tests requiring a thread no event has mirrored yet.
///
/// Expected: the thread is fetched from Discord, mirrored and returned
#[tokio::test]
async fn fetches_missing_thread_from_discord() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_linked, channel) = linked_forum(db).await?;
    let fakes = Fakes::new();
    fakes.gateway.add_thread(fake::thread_snapshot(
        5001,
        channel,
        fake::discord_user(AUTHOR_ID, "ada"),
        "Help",
    ));
    let ctx = fakes.context(db);

    let mirrored = DiscordThreadService::new(&ctx).require_thread(5001).await?;

    assert_eq!(mirrored.thread.thread_id, 5001);
    assert_eq!(mirrored.thread.author_id, AUTHOR_ID);
    assert_eq!(mirrored.post.discord_thread_id, Some(5001));

    Ok(())
}

/// Tests requiring a thread Discord does not know either.
///
/// Expected: Err(ThreadNotSynced)
#[tokio::test]
async fn fails_when_thread_cannot_be_fetched() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);

    let result = DiscordThreadService::new(&ctx).require_thread(5001).await;

    assert!(matches!(
        result,
        Err(AppError::SyncErr(SyncError::ThreadNotSynced(5001)))
    ));

    Ok(())
}
