use super::*;

/// Tests counting Discord replies to a message.
///
/// Expected: Ok(1) for the replied-to message
#[tokio::test]
async fn counts_replies_by_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mirrored = factory::helpers::create_mirrored_thread(db).await?;
    let parent =
        factory::create_message(db, &mirrored.thread.id, &mirrored.author.id).await?;
    factory::discord_message::DiscordMessageFactory::new(
        db,
        &mirrored.thread.id,
        &mirrored.author.id,
    )
    .parent_id(Some(parent.id.clone()))
    .build()
    .await?;

    let repo = DiscordMessageRepository::new(db);

    assert_eq!(repo.count_replies(parent.id.parse().unwrap()).await?, 1);
    assert!(repo.exists(parent.id.parse().unwrap()).await?);
    assert!(!repo.exists(1).await?);

    Ok(())
}
