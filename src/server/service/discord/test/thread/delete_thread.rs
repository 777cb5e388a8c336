use super::*;

/// Tests deleting a mirrored thread with attachments on its starter and a reply.
///
/// Expected: Ok(true), stored objects removed, post gone; a second delete is Ok(false)
#[tokio::test]
async fn deletes_thread_and_objects() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_linked, channel) = linked_forum(db).await?;
    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let service = DiscordThreadService::new(&ctx);

    let mut thread =
        fake::thread_snapshot(5001, channel, fake::discord_user(AUTHOR_ID, "ada"), "Help");
    thread.starter.attachments = vec![fake::attachment(9001, "a.png")];
    service.upsert_thread(&thread).await?;

    let mut reply =
        fake::thread_message(6001, &thread, fake::discord_user(MEMBER_ID, "bob"), "Same");
    reply.attachments = vec![fake::attachment(9002, "b.png")];
    DiscordMessageService::new(&ctx).upsert_message(&reply).await?;
    assert_eq!(fakes.storage.keys().len(), 2);

    assert!(service.delete_thread(5001).await?);

    assert!(fakes.storage.keys().is_empty());
    assert!(PostRepository::new(db).find_by_thread_id(5001).await?.is_none());
    assert!(!service.delete_thread(5001).await?);

    Ok(())
}
