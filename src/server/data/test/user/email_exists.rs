use super::*;

/// Tests detecting an email already in use.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_email_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("taken@test.com").build().await?;

    let repo = UserRepository::new(db.clone());

    assert!(repo.email_exists("taken@test.com", None).await?);

    Ok(())
}

/// Tests an email nobody uses.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_email_free() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("taken@test.com").build().await?;

    let repo = UserRepository::new(db.clone());

    assert!(!repo.email_exists("free@test.com", None).await?);

    Ok(())
}

/// Tests excluding the user being updated from the check.
///
/// Verifies that a user keeping their own email is not reported as a
/// conflict, while another user's email still is.
///
/// Expected: Ok(false) for own email, Ok(true) for another user's email
#[tokio::test]
async fn ignores_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let me = UserFactory::new(db).email("me@test.com").build().await?;
    UserFactory::new(db).email("other@test.com").build().await?;

    let repo = UserRepository::new(db.clone());

    assert!(!repo.email_exists("me@test.com", Some(me.id)).await?);
    assert!(repo.email_exists("other@test.com", Some(me.id)).await?);

    Ok(())
}
