use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the name and email and returns the record with
/// a generated id.
///
/// Expected: Ok with id assigned and fields preserved
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "a@x.com");

    Ok(())
}

/// Tests that duplicate name and email pairs are accepted.
///
/// No uniqueness constraint exists on either field, so both inserts succeed with
/// distinct ids.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn allows_duplicate_name_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        name: "Ann".to_string(),
        email: "a@x.com".to_string(),
    };

    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that inserting without the users table fails.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
