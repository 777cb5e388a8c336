use super::*;

/// Tests mirroring a forum channel with its tags.
///
/// Expected: the channel row exists, syncing is off by default and tags become post tags
#[tokio::test]
async fn mirrors_channel_and_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_community_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (community, guild) = factory::helpers::create_linked_community(db).await?;
    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let mut channel = fake::forum_channel(3001, guild.id.parse().unwrap());
    channel.available_tags = vec![ForumTagSnapshot {
        tag_id: 61,
        name: "bug".to_string(),
    }];

    let stored = DiscordChannelService::new(&ctx)
        .upsert_forum_channel(&channel)
        .await?;

    assert_eq!(stored.channel_id, 3001);
    assert!(!stored.should_sync);
    let tags = entity::prelude::PostTag::find().all(db).await?;
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].community_id, community.id);
    assert_eq!(tags[0].name, "bug");

    Ok(())
}

/// Tests mirroring a channel of a guild nobody linked.
///
/// Expected: Err(CommunityNotLinked) and no channel row
#[tokio::test]
async fn fails_for_unlinked_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_community_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let service = DiscordChannelService::new(&ctx);

    let result = service
        .upsert_forum_channel(&fake::forum_channel(3001, 7001))
        .await;

    assert!(matches!(
        result,
        Err(AppError::SyncErr(SyncError::CommunityNotLinked))
    ));
    assert!(!service.delete_channel(3001).await?);

    Ok(())
}
