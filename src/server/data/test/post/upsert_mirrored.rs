use super::*;

fn param(community_id: i32, thread_id: u64, title: &str) -> UpsertMirroredPostParam {
    let created_at = Utc::now() - Duration::hours(1);
    UpsertMirroredPostParam {
        community_id,
        discord_thread_id: thread_id,
        title: title.to_string(),
        content: "How do I reset my password?".to_string(),
        post_type: PostType::Question,
        statuses: PostStatuses::initial(PostType::Question),
        created_at,
        updated_at: created_at,
    }
}

/// Tests creating the post for a newly mirrored thread.
///
/// Verifies the post has no web author, is public and references the thread.
///
/// Expected: Ok with post created
#[tokio::test]
async fn creates_mirrored_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let linked = factory::helpers::create_linked_channel(db).await?;
    let author = factory::create_discord_user(db).await?;
    let thread = factory::create_thread(db, &linked.channel.id, &author.id).await?;
    let thread_id: u64 = thread.id.parse().unwrap();

    let repo = PostRepository::new(db);
    let post = repo
        .upsert_mirrored(param(linked.community.id, thread_id, "Password reset"))
        .await?;

    assert_eq!(post.author_id, None);
    assert_eq!(post.discord_thread_id, Some(thread_id));
    assert_eq!(
        post.question_status,
        Some(QuestionStatus::AwaitingAdminResponse)
    );

    let stored = entity::prelude::Post::find_by_id(post.id).one(db).await?.unwrap();
    assert!(!stored.private);
    assert_eq!(stored.title, "Password reset");

    Ok(())
}

/// Tests that upserting an already mirrored thread updates the same post.
///
/// Expected: Ok with a single post carrying the new title
#[tokio::test]
async fn updates_existing_post_for_thread() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mirrored = factory::helpers::create_mirrored_thread(db).await?;
    let thread_id: u64 = mirrored.thread.id.parse().unwrap();

    let repo = PostRepository::new(db);
    let post = repo
        .upsert_mirrored(param(mirrored.community.id, thread_id, "Renamed thread"))
        .await?;

    assert_eq!(post.id, mirrored.post.id);
    assert_eq!(post.title, "Renamed thread");
    assert_eq!(entity::prelude::Post::find().all(db).await?.len(), 1);

    Ok(())
}
