use super::*;

/// Tests listing channels and the invite of a community without a guild.
///
/// Expected: an empty list and no invite
#[tokio::test]
async fn unlinked_community_has_no_channels() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let service = DiscordChannelService::new(&ctx);

    assert!(service.list_for_community(community.id).await?.is_empty());
    assert_eq!(service.invite_link(community.id).await?, None);

    Ok(())
}

/// Tests listing the channels of a linked community.
///
/// Expected: the channel with its thread count, and its stored invite
#[tokio::test]
async fn lists_channels_with_thread_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mirrored = factory::helpers::create_mirrored_thread(db).await?;
    DiscordChannelRepository::new(db)
        .set_invite_link(
            mirrored.channel.id.parse().unwrap(),
            Some("https://discord.gg/abc".to_string()),
        )
        .await?;
    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let service = DiscordChannelService::new(&ctx);

    let channels = service.list_for_community(mirrored.community.id).await?;

    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].0.channel_id.to_string(), mirrored.channel.id);
    assert_eq!(channels[0].1, 1);
    assert_eq!(
        service.invite_link(mirrored.community.id).await?,
        Some("https://discord.gg/abc".to_string())
    );

    Ok(())
}
