use super::*;

/// Tests that accepting an answer clears the previously accepted one.
///
/// Expected: Ok with only the new comment accepted
#[tokio::test]
async fn moves_accepted_flag_between_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let post = factory::create_post(db, community.id).await?;
    let previous = factory::comment::CommentFactory::new(db, post.id)
        .accepted(true)
        .build()
        .await?;
    let answer = factory::create_comment(db, post.id).await?;

    let repo = CommentRepository::new(db);
    repo.set_accepted(post.id, answer.id, true).await?;

    assert!(!repo.find_by_id(previous.id).await?.unwrap().is_accepted_answer);
    assert!(repo.find_by_id(answer.id).await?.unwrap().is_accepted_answer);

    Ok(())
}

/// Tests that other posts keep their accepted answers.
///
/// Expected: Ok with the other post's answer still accepted
#[tokio::test]
async fn leaves_other_posts_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let post = factory::create_post(db, community.id).await?;
    let other_post = factory::create_post(db, community.id).await?;
    let other_answer = factory::comment::CommentFactory::new(db, other_post.id)
        .accepted(true)
        .build()
        .await?;
    let answer = factory::create_comment(db, post.id).await?;

    let repo = CommentRepository::new(db);
    repo.set_accepted(post.id, answer.id, true).await?;

    assert!(repo.find_by_id(other_answer.id).await?.unwrap().is_accepted_answer);

    Ok(())
}
