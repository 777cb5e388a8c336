use super::*;

/// Tests a full sync of a guild with one synced forum channel.
///
/// Expected: channels, members, the thread and its replies are mirrored and the guild is
/// stamped as synced
#[tokio::test]
async fn mirrors_whole_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (linked, channel) = linked_forum(db).await?;
    let guild_id: u64 = linked.guild.id.parse().unwrap();
    let guild = GuildSnapshot {
        guild_id,
        name: "Renamed guild".to_string(),
        icon: Some("a_icon".to_string()),
    };

    let fakes = Fakes::new();
    let author = fake::discord_user(AUTHOR_ID, "ada");
    let member = fake::discord_user(MEMBER_ID, "bob");
    *fakes.gateway.members.lock().unwrap() =
        vec![author.clone(), member.clone(), fake::discord_user(4003, "cy")];
    fakes.gateway.add_channel(channel.clone());

    let thread = fake::thread_snapshot(5001, channel, author.clone(), "Help");
    let base = Utc::now() - Duration::minutes(10);
    let mut starter = fake::thread_message(5001, &thread, author.clone(), "Help");
    starter.created_at = base;
    let mut answer = fake::thread_message(6001, &thread, member, "Try X");
    answer.created_at = base + Duration::minutes(1);
    let mut reply = fake::thread_message(6002, &thread, author, "Worked");
    reply.created_at = base + Duration::minutes(2);
    reply.reference = Some(MessageReferenceSnapshot {
        message_id: 6001,
        author_id: MEMBER_ID,
        is_system: false,
    });
    fakes.gateway.add_thread(thread);
    for message in [starter, answer, reply] {
        fakes.gateway.add_message(message);
    }
    let ctx = fakes.context(db);

    let summary = Synchronizer::new(&ctx).sync_guild(&guild, &NoProgress).await?;

    assert_eq!(summary.forum_channels, 1);
    assert_eq!(summary.users, 3);
    assert_eq!(summary.threads, 1);
    assert_eq!(summary.messages, 2);
    assert!(summary.errors.is_empty(), "{:?}", summary.errors);

    let stored_guild = DiscordGuildRepository::new(db).find_by_id(guild_id).await?.unwrap();
    assert_eq!(stored_guild.name, "Renamed guild");
    assert!(stored_guild.last_sync_at.is_some());

    let comments = CommentRepository::new(db);
    let answer = comments.find_by_discord_message_id(6001).await?.unwrap();
    let reply = comments.find_by_discord_message_id(6002).await?.unwrap();
    assert_eq!(reply.parent_id, Some(answer.id));

    Ok(())
}

/// Tests a full sync of a guild nobody linked.
///
/// Expected: Err(CommunityNotLinked) before anything is fetched
#[tokio::test]
async fn fails_for_unlinked_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let ctx = fakes.context(db);
    let guild = GuildSnapshot {
        guild_id: 7001,
        name: "Stranger".to_string(),
        icon: None,
    };

    let result = Synchronizer::new(&ctx).sync_guild(&guild, &NoProgress).await;

    assert!(matches!(
        result,
        Err(AppError::SyncErr(SyncError::CommunityNotLinked))
    ));

    Ok(())
}

/// Tests paging through a guild with more members than fit in one page.
///
/// Expected: two pages requested, the second after the last member of the first, and
/// every member mirrored
#[tokio::test]
async fn pages_members_past_a_full_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let members = guild_members(MEMBER_PAGE_SIZE + 250);
    *fakes.gateway.members.lock().unwrap() = members.clone();
    let ctx = fakes.context(db);

    let synced = Synchronizer::new(&ctx)
        .sync_members(7001, &NoProgress)
        .await?;

    assert_eq!(synced, MEMBER_PAGE_SIZE + 250);
    assert_eq!(
        *fakes.gateway.member_requests.lock().unwrap(),
        vec![None, Some(members[MEMBER_PAGE_SIZE as usize - 1].user_id)]
    );
    let ids: Vec<u64> = members.iter().map(|member| member.user_id).collect();
    let stored = DiscordUserRepository::new(db).find_by_ids(&ids).await?;
    assert_eq!(stored.len(), ids.len());

    Ok(())
}

/// Tests a guild whose member count is exactly one page.
///
/// Expected: a second page is requested, comes back empty and ends the paging
#[tokio::test]
async fn stops_on_empty_page_after_full_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fakes = Fakes::new();
    let members = guild_members(MEMBER_PAGE_SIZE);
    *fakes.gateway.members.lock().unwrap() = members.clone();
    let ctx = fakes.context(db);

    let synced = Synchronizer::new(&ctx)
        .sync_members(7001, &NoProgress)
        .await?;

    assert_eq!(synced, MEMBER_PAGE_SIZE);
    assert_eq!(
        *fakes.gateway.member_requests.lock().unwrap(),
        vec![None, Some(members.last().unwrap().user_id)]
    );

    Ok(())
}

fn guild_members(count: u64) -> Vec<DiscordUserParam> {
    (0..count)
        .map(|offset| fake::discord_user(10_000 + offset, &format!("member{}", offset)))
        .collect()
}
