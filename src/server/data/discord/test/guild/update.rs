use super::*;

/// Tests refreshing the name and icon of a linked guild.
///
/// Expected: Ok with name and icon replaced, community link unchanged
#[tokio::test]
async fn refreshes_name_and_icon() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (community, guild) = factory::helpers::create_linked_community(db).await?;
    let guild_id: u64 = guild.id.parse().unwrap();

    let repo = DiscordGuildRepository::new(db);
    repo.update(&GuildSnapshot {
        guild_id,
        name: "Renamed".to_string(),
        icon: Some("https://cdn.discordapp.com/icons/1/abc.png".to_string()),
    })
    .await?;

    let stored = repo.find_by_id(guild_id).await?.unwrap();
    assert_eq!(stored.name, "Renamed");
    assert_eq!(
        stored.icon.as_deref(),
        Some("https://cdn.discordapp.com/icons/1/abc.png")
    );
    assert_eq!(stored.community_id, community.id);

    Ok(())
}

/// Tests updating a guild that was never linked.
///
/// Expected: Ok with no row created
#[tokio::test]
async fn ignores_unlinked_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    repo.update(&GuildSnapshot {
        guild_id: 42,
        name: "Nobody".to_string(),
        icon: None,
    })
    .await?;

    assert!(entity::prelude::DiscordGuild::find().all(db).await?.is_empty());

    Ok(())
}
