use super::*;

/// Tests listing users from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert!(users.is_empty());

    Ok(())
}

/// Tests that users are listed in insertion order.
///
/// Expected: Ok with users ordered by creation
#[tokio::test]
async fn returns_users_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::UserFactory::new(db).name("Zed").build().await?;
    let second = factory::user::UserFactory::new(db).name("Ann").build().await?;
    let third = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
    assert_eq!(users[0].name, "Zed");
    assert_eq!(users[1].name, "Ann");

    Ok(())
}
