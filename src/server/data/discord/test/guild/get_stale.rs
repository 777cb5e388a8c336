use super::*;

/// Tests selecting guilds that need a reconciliation sync.
///
/// Verifies never-synced guilds and guilds synced before the threshold are returned
/// while recently synced guilds are not.
///
/// Expected: Ok with the never-synced and old guilds
#[tokio::test]
async fn returns_never_synced_and_old_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_community_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let never = factory::create_community(db).await?;
    let old = factory::create_community(db).await?;
    let fresh = factory::create_community(db).await?;
    let never_guild = factory::create_guild(db, never.id).await?;
    let old_guild = factory::discord_guild::DiscordGuildFactory::new(db, old.id)
        .last_sync_at(Some(now - Duration::hours(30)))
        .build()
        .await?;
    factory::discord_guild::DiscordGuildFactory::new(db, fresh.id)
        .last_sync_at(Some(now - Duration::minutes(5)))
        .build()
        .await?;

    let repo = DiscordGuildRepository::new(db);
    let mut stale: Vec<String> = repo
        .get_stale(now - Duration::hours(24))
        .await?
        .into_iter()
        .map(|guild| guild.guild_id.to_string())
        .collect();
    stale.sort();
    let mut expected = vec![never_guild.id, old_guild.id];
    expected.sort();

    assert_eq!(stale, expected);

    Ok(())
}
