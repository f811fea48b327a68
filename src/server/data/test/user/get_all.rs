use super::*;

/// Tests listing users.
///
/// Expected: Ok with every returned user, in backend order
#[tokio::test]
async fn gets_all_users() -> Result<(), TestError> {
    let records = vec![create_user(), create_user()];
    let (test, client) =
        data_client(Script::new().on(Command::AllUsers, Step::found(&records))).await?;

    let repo = UserRepository::new(&client);
    let users = repo.get_all().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, records[0].id);
    assert_eq!(users[1].id, records[1].id);
    assert_eq!(test.data()?.received()[0].payload, json!({}));

    Ok(())
}

/// Tests listing users when there are none.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_list() -> Result<(), TestError> {
    let (_test, client) =
        data_client(Script::new().on(Command::AllUsers, Step::found(json!([])))).await?;

    let repo = UserRepository::new(&client);
    let users = repo.get_all().await.unwrap();

    assert!(users.is_empty());

    Ok(())
}
