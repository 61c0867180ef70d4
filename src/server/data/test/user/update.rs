use super::*;

/// Tests updating an existing user.
///
/// Verifies that both name and email are replaced.
///
/// Expected: Ok(Some(User)) with the new values
#[tokio::test]
async fn updates_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .nom("Before")
        .email("before@test.com")
        .build()
        .await?;

    let repo = UserRepository::new(db.clone());
    let updated = repo
        .update(
            created.id,
            UpdateUserParam {
                nom: "After".to_string(),
                email: "after@test.com".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.nom, "After");
    assert_eq!(updated.email, "after@test.com");

    Ok(())
}

/// Tests updating a user that does not exist.
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
    let result = repo
        .update(
            7,
            UpdateUserParam {
                nom: "Nobody".to_string(),
                email: "nobody@test.com".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
