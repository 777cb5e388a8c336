use super::*;

/// Tests resolving the community of an unknown guild.
///
/// Expected: Err(CommunityNotLinked), which is not critical
#[tokio::test]
async fn fails_for_unlinked_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_community_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);

    let result = DiscordGuildService::new(&ctx).require_linked(1234).await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::SyncErr(SyncError::CommunityNotLinked)));
    assert!(!err.is_critical());

    Ok(())
}

/// Tests unlinking a community's guild.
///
/// Expected: Ok(true) then Ok(false), and the guild no longer resolves
#[tokio::test]
async fn unlink_removes_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_community_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (community, guild) = factory::helpers::create_linked_community(db).await?;
    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let service = DiscordGuildService::new(&ctx);

    assert!(service.unlink(community.id).await?);
    assert!(!service.unlink(community.id).await?);
    assert!(service
        .require_linked(guild.id.parse().unwrap())
        .await
        .is_err());

    Ok(())
}
