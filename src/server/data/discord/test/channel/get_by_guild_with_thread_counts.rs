use super::*;

/// Tests listing a guild's channels with their thread counts.
///
/// Expected: Ok with channels ordered by name and per-channel counts
#[tokio::test]
async fn lists_channels_ordered_by_name_with_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, guild) = factory::helpers::create_linked_community(db).await?;
    let support = factory::discord_channel::DiscordChannelFactory::new(db, &guild.id)
        .name("support")
        .build()
        .await?;
    let announcements = factory::discord_channel::DiscordChannelFactory::new(db, &guild.id)
        .name("announcements")
        .build()
        .await?;
    let author = factory::create_discord_user(db).await?;
    factory::create_thread(db, &support.id, &author.id).await?;
    factory::create_thread(db, &support.id, &author.id).await?;

    let repo = DiscordChannelRepository::new(db);
    let channels = repo
        .get_by_guild_with_thread_counts(guild.id.parse().unwrap())
        .await?;

    let summary: Vec<(String, u64)> = channels
        .into_iter()
        .map(|(channel, count)| (channel.name, count))
        .collect();
    assert_eq!(
        summary,
        vec![(announcements.name, 0), (support.name, 2)]
    );

    Ok(())
}
