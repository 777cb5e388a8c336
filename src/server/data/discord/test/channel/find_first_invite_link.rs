use super::*;

/// Tests finding the stored invite among a guild's channels.
///
/// Expected: Ok(Some) with the only stored invite
#[tokio::test]
async fn returns_stored_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, guild) = factory::helpers::create_linked_community(db).await?;
    factory::create_channel(db, &guild.id).await?;
    factory::discord_channel::DiscordChannelFactory::new(db, &guild.id)
        .invite_link(Some("https://discord.gg/xyz".to_string()))
        .build()
        .await?;

    let repo = DiscordChannelRepository::new(db);
    let invite = repo
        .find_first_invite_link(guild.id.parse().unwrap())
        .await?;

    assert_eq!(invite.as_deref(), Some("https://discord.gg/xyz"));

    Ok(())
}

/// Tests a guild without any invite.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_invites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, guild) = factory::helpers::create_linked_community(db).await?;
    factory::create_channel(db, &guild.id).await?;

    let repo = DiscordChannelRepository::new(db);

    assert!(repo
        .find_first_invite_link(guild.id.parse().unwrap())
        .await?
        .is_none());

    Ok(())
}
