use super::*;

/// Tests resolving the community header.
///
/// Expected: Ok(Community) matching the header
#[tokio::test]
async fn resolves_community() -> Result<(), AppError> {
    let test = TestBuilder::new().with_community_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let headers = headers(Some(&community.id.to_string()), None);

    let resolved = AuthGuard::new(db, &headers).community().await?;

    assert_eq!(resolved.id, community.id);
    assert_eq!(resolved.domain, community.domain);

    Ok(())
}

/// Tests a missing or malformed community header.
///
/// Expected: Err(AuthError::MissingCommunity)
#[tokio::test]
async fn rejects_missing_or_malformed_community() -> Result<(), AppError> {
    let test = TestBuilder::new().with_community_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for headers in [headers(None, None), headers(Some("abc"), None)] {
        let result = AuthGuard::new(db, &headers).community().await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingCommunity))
        ));
    }

    Ok(())
}

/// Tests a community id with no community behind it.
///
/// Expected: Err(AuthError::CommunityNotFound)
#[tokio::test]
async fn rejects_unknown_community() -> Result<(), AppError> {
    let test = TestBuilder::new().with_community_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = headers(Some("4242"), None);
    let result = AuthGuard::new(db, &headers).community().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::CommunityNotFound(4242)))
    ));

    Ok(())
}
