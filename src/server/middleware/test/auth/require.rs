use super::*;

/// Tests a member passing a guard with no permissions.
///
/// Expected: Ok(Identity) with the member and community
#[tokio::test]
async fn allows_member_without_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_community_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let user = factory::create_user(db, community.id).await?;
    let headers = headers(Some(&community.id.to_string()), Some(&user.external_auth_id));

    let identity = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(identity.user.id, user.id);
    assert_eq!(identity.community.id, community.id);

    Ok(())
}

/// Tests an admin passing the admin permission.
///
/// Expected: Ok(Identity)
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_community_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let admin = factory::create_admin(db, community.id).await?;
    let headers = headers(Some(&community.id.to_string()), Some(&admin.external_auth_id));

    let identity = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert!(identity.user.is_admin());

    Ok(())
}

/// Tests a member on an admin route.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_member_admin_permission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_community_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let user = factory::create_user(db, community.id).await?;
    let headers = headers(Some(&community.id.to_string()), Some(&user.external_auth_id));

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, user.id);
        }
        unexpected => panic!("Expected AccessDenied, got: {:?}", unexpected.err()),
    }

    Ok(())
}

/// Tests a request without the user header.
///
/// Expected: Err(AuthError::MissingUser)
#[tokio::test]
async fn rejects_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_community_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    let headers = headers(Some(&community.id.to_string()), None);

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::MissingUser))));

    Ok(())
}

/// Tests a member of one community calling into another.
///
/// Expected: Err(AuthError::UserNotInCommunity)
#[tokio::test]
async fn rejects_member_of_other_community() -> Result<(), AppError> {
    let test = TestBuilder::new().with_community_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_community(db).await?;
    let other = factory::create_community(db).await?;
    let user = factory::create_user(db, home.id).await?;
    let headers = headers(Some(&other.id.to_string()), Some(&user.external_auth_id));

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInCommunity {
            external_id,
            community_id,
        })) => {
            assert_eq!(external_id, user.external_auth_id);
            assert_eq!(community_id, other.id);
        }
        unexpected => panic!("Expected UserNotInCommunity, got: {:?}", unexpected.err()),
    }

    Ok(())
}
