use super::*;

/// Tests deleting an existing user.
///
/// Verifies that the repository returns the deleted record and that the
/// user can no longer be found.
///
/// Expected: Ok(Some(User)), then Ok(None) on lookup
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).nom("Gone").build().await?;

    let repo = UserRepository::new(db.clone());
    let deleted = repo.delete(created.id).await?;

    assert_eq!(deleted.map(|u| u.nom), Some("Gone".to_string()));
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db.clone());
    let result = repo.delete(999).await?;

    assert!(result.is_none());

    Ok(())
}
