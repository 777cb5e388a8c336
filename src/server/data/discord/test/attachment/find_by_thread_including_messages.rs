use super::*;

fn attachment(attachment_id: u64) -> AttachmentSnapshot {
    AttachmentSnapshot {
        attachment_id,
        filename: format!("{}.png", attachment_id),
        content_type: Some("image/png".to_string()),
        size: 1024,
        url: format!("https://cdn.discordapp.com/attachments/{}.png", attachment_id),
    }
}

/// Tests collecting every attachment under a thread.
///
/// Verifies starter attachments (thread-owned) and message attachments are both returned,
/// while attachments of other threads are not.
///
/// Expected: Ok with both attachments of the thread
#[tokio::test]
async fn collects_starter_and_message_attachments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mirrored = factory::helpers::create_mirrored_thread(db).await?;
    let other = factory::create_thread(db, &mirrored.channel.id, &mirrored.author.id).await?;
    let message =
        factory::create_message(db, &mirrored.thread.id, &mirrored.author.id).await?;
    let thread_id: u64 = mirrored.thread.id.parse().unwrap();

    let repo = DiscordAttachmentRepository::new(db);
    repo.create(AttachmentOwner::Thread(thread_id), &attachment(1), "discord/attachments/1.png")
        .await?;
    repo.create(
        AttachmentOwner::Message(message.id.parse().unwrap()),
        &attachment(2),
        "discord/attachments/2.png",
    )
    .await?;
    repo.create(
        AttachmentOwner::Thread(other.id.parse().unwrap()),
        &attachment(3),
        "discord/attachments/3.png",
    )
    .await?;

    let mut keys: Vec<String> = repo
        .find_by_thread_including_messages(thread_id)
        .await?
        .into_iter()
        .map(|stored| stored.object_key)
        .collect();
    keys.sort();

    assert_eq!(
        keys,
        vec![
            "discord/attachments/1.png".to_string(),
            "discord/attachments/2.png".to_string()
        ]
    );

    Ok(())
}
