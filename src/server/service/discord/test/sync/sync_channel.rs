use super::*;

/// Tests syncing a channel with syncing disabled.
///
/// Expected: an empty summary and no post, even though Discord has a thread
#[tokio::test]
async fn skips_unsynced_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_community, guild) = factory::helpers::create_linked_community(db).await?;
    let channel = factory::discord_channel::DiscordChannelFactory::new(db, &guild.id)
        .should_sync(false)
        .build()
        .await?;
    let snapshot = fake::forum_channel(channel.id.parse().unwrap(), guild.id.parse().unwrap());
    let fakes = Fakes::new();
    fakes.gateway.add_channel(snapshot.clone());
    fakes.gateway.add_thread(fake::thread_snapshot(
        5001,
        snapshot.clone(),
        fake::discord_user(AUTHOR_ID, "ada"),
        "Help",
    ));
    let ctx = fakes.context(db);

    let summary = Synchronizer::new(&ctx)
        .sync_channel(snapshot.channel_id, &NoProgress)
        .await?;

    assert_eq!(summary, Default::default());
    assert!(PostRepository::new(db).find_by_thread_id(5001).await?.is_none());

    Ok(())
}

/// Tests syncing a channel where Discord fails to return one of the threads.
///
/// Expected: the good thread is counted and the failing one reported as an error
#[tokio::test]
async fn collects_thread_errors() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_linked, channel) = linked_forum(db).await?;
    let fakes = Fakes::new();
    fakes.gateway.add_channel(channel.clone());
    for thread_id in [5001, 5002] {
        fakes.gateway.add_thread(fake::thread_snapshot(
            thread_id,
            channel.clone(),
            fake::discord_user(AUTHOR_ID, "ada"),
            "Help",
        ));
    }
    fakes.gateway.failing_threads.lock().unwrap().push(5002);
    let ctx = fakes.context(db);

    let summary = Synchronizer::new(&ctx)
        .sync_channel(channel.channel_id, &NoProgress)
        .await?;

    assert_eq!(summary.threads, 1);
    assert_eq!(
        summary.errors,
        vec!["Failed to sync thread 5002: thread 5002 unavailable".to_string()]
    );
    assert!(PostRepository::new(db).find_by_thread_id(5001).await?.is_some());

    Ok(())
}

/// Tests syncing a channel where Discord lost the starter message of one thread.
///
/// Expected: the thread is skipped without an error and the other thread is synced
#[tokio::test]
async fn skips_thread_with_deleted_starter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_linked, channel) = linked_forum(db).await?;
    let fakes = Fakes::new();
    fakes.gateway.add_channel(channel.clone());
    for thread_id in [5001, 5002] {
        fakes.gateway.add_thread(fake::thread_snapshot(
            thread_id,
            channel.clone(),
            fake::discord_user(AUTHOR_ID, "ada"),
            "Help",
        ));
    }
    fakes.gateway.missing_starters.lock().unwrap().push(5002);
    let ctx = fakes.context(db);

    let summary = Synchronizer::new(&ctx)
        .sync_channel(channel.channel_id, &NoProgress)
        .await?;

    assert_eq!(summary.threads, 1);
    assert!(summary.errors.is_empty(), "{:?}", summary.errors);
    assert!(PostRepository::new(db).find_by_thread_id(5001).await?.is_some());
    assert!(PostRepository::new(db).find_by_thread_id(5002).await?.is_none());

    Ok(())
}

/// Tests syncing a thread whose history spans several message pages.
///
/// Expected: pages are requested with a `before` cursor until a short page and every
/// reply is mirrored oldest first
#[tokio::test]
async fn mirrors_long_thread_history_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_linked, channel) = linked_forum(db).await?;
    let fakes = Fakes::new();
    fakes.gateway.add_channel(channel.clone());

    let author = fake::discord_user(AUTHOR_ID, "ada");
    let thread = fake::thread_snapshot(5001, channel.clone(), author.clone(), "Help");
    let base = Utc::now() - Duration::hours(1);
    let mut starter = fake::thread_message(5001, &thread, author, "Help");
    starter.created_at = base;
    fakes.gateway.add_message(starter);

    let reply_ids: Vec<u64> = (6001..6251).collect();
    for (offset, message_id) in reply_ids.iter().enumerate() {
        let mut reply = fake::thread_message(
            *message_id,
            &thread,
            fake::discord_user(MEMBER_ID, "bob"),
            &format!("Reply {}", offset),
        );
        reply.created_at = base + Duration::seconds(offset as i64 + 1);
        fakes.gateway.add_message(reply);
    }
    fakes.gateway.add_thread(thread);
    let ctx = fakes.context(db);

    let summary = Synchronizer::new(&ctx)
        .sync_channel(channel.channel_id, &NoProgress)
        .await?;

    assert_eq!(summary.threads, 1);
    assert_eq!(summary.messages, reply_ids.len() as u64);
    assert!(summary.errors.is_empty(), "{:?}", summary.errors);
    assert_eq!(
        *fakes.gateway.message_requests.lock().unwrap(),
        vec![(5001, None), (5001, Some(6151)), (5001, Some(6051))]
    );
    assert!(reply_ids.len() > usize::from(MESSAGE_PAGE_SIZE) * 2);

    let comments = CommentRepository::new(db);
    let mut comment_ids = Vec::new();
    for message_id in &reply_ids {
        let comment = comments.find_by_discord_message_id(*message_id).await?.unwrap();
        comment_ids.push(comment.id);
    }
    assert!(comment_ids.windows(2).all(|pair| pair[0] < pair[1]));

    Ok(())
}
