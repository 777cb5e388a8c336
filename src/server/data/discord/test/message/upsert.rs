use super::*;

/// Tests that an edited message overwrites its mirrored row.
///
/// Expected: Ok with the new content stored under the same id
#[tokio::test]
async fn overwrites_existing_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mirrored = factory::helpers::create_mirrored_thread(db).await?;
    let message =
        factory::create_message(db, &mirrored.thread.id, &mirrored.author.id).await?;

    let repo = DiscordMessageRepository::new(db);
    let now = Utc::now();
    repo.upsert(UpsertMessageParam {
        message_id: message.id.parse().unwrap(),
        thread_id: mirrored.thread.id.parse().unwrap(),
        content: "edited".to_string(),
        author_id: mirrored.author.id.parse().unwrap(),
        parent_id: None,
        created_at: message.created_at,
        updated_at: now,
    })
    .await?;

    let stored = entity::prelude::DiscordMessage::find_by_id(message.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.content, "edited");
    assert_eq!(entity::prelude::DiscordMessage::find().all(db).await?.len(), 1);

    Ok(())
}
