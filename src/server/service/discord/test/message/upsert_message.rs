use super::*;

/// Tests mirroring a reply from a guild member.
///
/// Expected: Ok(Synced) with a comment that has no web author
#[tokio::test]
async fn mirrors_message_as_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let (_linked, thread, post_id) = mirrored_thread(db, &fakes).await?;
    let ctx = fakes.context(db);
    let message =
        fake::thread_message(6001, &thread, fake::discord_user(MEMBER_ID, "bob"), "Same here");

    let outcome = DiscordMessageService::new(&ctx).upsert_message(&message).await?;

    let MessageSyncOutcome::Synced(comment) = outcome else {
        panic!("expected a synced comment, got {:?}", outcome);
    };
    assert_eq!(comment.post_id, post_id);
    assert_eq!(comment.author_id, None);
    assert_eq!(comment.content, "Same here");
    assert_eq!(comment.discord_message_id, Some(6001));

    Ok(())
}

/// Tests the messages that are never mirrored.
///
/// Expected: Ok(Skipped) for the bot's own, system and direct messages
#[tokio::test]
async fn skips_bot_system_and_direct_messages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let (_linked, thread, _post_id) = mirrored_thread(db, &fakes).await?;
    let ctx = fakes.context(db);
    let service = DiscordMessageService::new(&ctx);

    let from_bot = fake::thread_message(6001, &thread, fake::bot_user(), "On this post...");
    let mut system = fake::thread_message(6002, &thread, fake::discord_user(MEMBER_ID, "bob"), "");
    system.is_system = true;
    let mut direct =
        fake::thread_message(6003, &thread, fake::discord_user(MEMBER_ID, "bob"), "psst");
    direct.guild_id = None;

    assert_eq!(service.upsert_message(&from_bot).await?, MessageSyncOutcome::Skipped);
    assert_eq!(service.upsert_message(&system).await?, MessageSyncOutcome::Skipped);
    assert_eq!(service.upsert_message(&direct).await?, MessageSyncOutcome::Skipped);

    Ok(())
}

/// Tests the thread author answering a question that waits on them.
///
/// Expected: the question moves to AWAITING_ADMIN_RESPONSE and the admin is notified
#[tokio::test]
async fn author_reply_returns_question_to_admins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let (linked, thread, post_id) = mirrored_thread(db, &fakes).await?;
    let admin = factory::create_admin(db, linked.community.id).await?;
    PostRepository::new(db)
        .set_question_status(post_id, QuestionStatus::AwaitingUserResponse)
        .await?;
    let ctx = fakes.context(db);
    let message =
        fake::thread_message(6001, &thread, fake::discord_user(AUTHOR_ID, "ada"), "Tried it");

    DiscordMessageService::new(&ctx).upsert_message(&message).await?;

    let post = PostRepository::new(db).find_by_id(post_id).await?.unwrap();
    assert_eq!(
        post.question_status,
        Some(QuestionStatus::AwaitingAdminResponse)
    );
    assert_eq!(fakes.notifier.admin_notifications(), vec![(admin.id, post_id)]);

    Ok(())
}

/// Tests a reply from someone other than the thread author.
///
/// Expected: the question keeps waiting on the user
#[tokio::test]
async fn member_reply_keeps_question_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let (linked, thread, post_id) = mirrored_thread(db, &fakes).await?;
    factory::create_admin(db, linked.community.id).await?;
    PostRepository::new(db)
        .set_question_status(post_id, QuestionStatus::AwaitingUserResponse)
        .await?;
    let ctx = fakes.context(db);
    let message =
        fake::thread_message(6001, &thread, fake::discord_user(MEMBER_ID, "bob"), "+1");

    DiscordMessageService::new(&ctx).upsert_message(&message).await?;

    let post = PostRepository::new(db).find_by_id(post_id).await?.unwrap();
    assert_eq!(
        post.question_status,
        Some(QuestionStatus::AwaitingUserResponse)
    );
    assert!(fakes.notifier.admin_notifications().is_empty());

    Ok(())
}

/// Tests reply references to a mirrored message and to the thread starter.
///
/// Expected: the first links to the parent comment, the second has no parent
#[tokio::test]
async fn links_replies_to_parent_comments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let (_linked, thread, _post_id) = mirrored_thread(db, &fakes).await?;
    let ctx = fakes.context(db);
    let service = DiscordMessageService::new(&ctx);

    let first =
        fake::thread_message(6001, &thread, fake::discord_user(MEMBER_ID, "bob"), "Try X");
    let MessageSyncOutcome::Synced(parent) = service.upsert_message(&first).await? else {
        panic!("expected the first message to sync");
    };

    let mut reply =
        fake::thread_message(6002, &thread, fake::discord_user(AUTHOR_ID, "ada"), "Thanks");
    reply.reference = Some(MessageReferenceSnapshot {
        message_id: 6001,
        author_id: MEMBER_ID,
        is_system: false,
    });
    let mut to_starter =
        fake::thread_message(6003, &thread, fake::discord_user(MEMBER_ID, "bob"), "Quoting");
    to_starter.reference = Some(MessageReferenceSnapshot {
        message_id: 5001,
        author_id: AUTHOR_ID,
        is_system: false,
    });

    let MessageSyncOutcome::Synced(child) = service.upsert_message(&reply).await? else {
        panic!("expected the reply to sync");
    };
    let MessageSyncOutcome::Synced(unparented) = service.upsert_message(&to_starter).await?
    else {
        panic!("expected the starter reply to sync");
    };

    assert_eq!(child.parent_id, Some(parent.id));
    assert_eq!(unparented.parent_id, None);

    Ok(())
}

/// Tests notifying the users watching a post.
///
/// Expected: the watcher receives a notification for the new comment
#[tokio::test]
async fn notifies_watchers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let (linked, thread, post_id) = mirrored_thread(db, &fakes).await?;
    let watcher = factory::create_user(db, linked.community.id).await?;
    WatchedPostRepository::new(db).watch(post_id, watcher.id).await?;
    let ctx = fakes.context(db);
    let message =
        fake::thread_message(6001, &thread, fake::discord_user(MEMBER_ID, "bob"), "Any news?");

    let MessageSyncOutcome::Synced(comment) =
        DiscordMessageService::new(&ctx).upsert_message(&message).await?
    else {
        panic!("expected the message to sync");
    };

    assert_eq!(
        fakes.notifier.comment_notifications(),
        vec![(watcher.id, comment.id)]
    );

    Ok(())
}

/// Tests a message arriving before its thread was mirrored.
///
/// Expected: the thread is fetched from Discord and the message mirrored into its post
#[tokio::test]
async fn mirrors_message_of_unseen_thread() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_linked, channel) = linked_forum(db).await?;
    let fakes = Fakes::new();
    let thread =
        fake::thread_snapshot(5001, channel, fake::discord_user(AUTHOR_ID, "ada"), "Help");
    fakes.gateway.add_thread(thread.clone());
    let ctx = fakes.context(db);
    let message =
        fake::thread_message(6001, &thread, fake::discord_user(MEMBER_ID, "bob"), "Early");

    let outcome = DiscordMessageService::new(&ctx).upsert_message(&message).await?;

    assert!(matches!(outcome, MessageSyncOutcome::Synced(_)));
    assert!(PostRepository::new(db).find_by_thread_id(5001).await?.is_some());

    Ok(())
}
