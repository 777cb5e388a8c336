use super::*;

/// Tests moving a question to a new status.
///
/// Expected: Ok with status persisted
#[tokio::test]
async fn updates_question_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let post = factory::create_post(db, community.id).await?;

    let repo = PostRepository::new(db);
    repo.set_question_status(post.id, QuestionStatus::Resolved)
        .await?;

    let stored = repo.find_by_id(post.id).await?.unwrap();
    assert_eq!(stored.question_status, Some(QuestionStatus::Resolved));

    Ok(())
}
