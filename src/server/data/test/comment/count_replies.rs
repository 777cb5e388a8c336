use super::*;

/// Tests counting direct replies to a comment.
///
/// Expected: Ok(2) for a comment with two replies, Ok(0) for a leaf
#[tokio::test]
async fn counts_direct_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let post = factory::create_post(db, community.id).await?;
    let parent = factory::create_comment(db, post.id).await?;
    let reply = factory::comment::CommentFactory::new(db, post.id)
        .parent_id(Some(parent.id))
        .build()
        .await?;
    factory::comment::CommentFactory::new(db, post.id)
        .parent_id(Some(parent.id))
        .build()
        .await?;

    let repo = CommentRepository::new(db);

    assert_eq!(repo.count_replies(parent.id).await?, 2);
    assert_eq!(repo.count_replies(reply.id).await?, 0);

    Ok(())
}
