use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the user and returns it with a
/// generated id and the provided fields.
///
/// Expected: Ok(User) with matching name and email
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db.clone());
    let user = repo
        .create(CreateUserParam {
            nom: "Martin".to_string(),
            email: "martin@test.com".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.nom, "Martin");
    assert_eq!(user.email, "martin@test.com");

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.email, user.email);

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Verifies that inserting a second user with an existing email surfaces a
/// database error instead of creating a duplicate.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_on_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("taken@test.com").build().await?;

    let repo = UserRepository::new(db.clone());
    let result = repo
        .create(CreateUserParam {
            nom: "Other".to_string(),
            email: "taken@test.com".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
