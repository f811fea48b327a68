use super::*;

/// Tests finding a user by email.
///
/// Verifies that the lookup payload is the bare email string.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_existing_user() -> Result<(), TestError> {
    let record = UserFactory::new().email("ada@example.com").build();
    let (test, client) =
        data_client(Script::new().on(Command::FindUser, Step::found(&record))).await?;

    let repo = UserRepository::new(&client);
    let user = repo.find_by_email("ada@example.com").await.unwrap();

    assert_eq!(user.map(|user| user.id), Some(record.id));
    assert_eq!(test.data()?.received()[0].payload, json!("ada@example.com"));

    Ok(())
}

/// Tests finding an email no user has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), TestError> {
    let (_test, client) =
        data_client(Script::new().on(Command::FindUser, Step::not_found())).await?;

    let repo = UserRepository::new(&client);
    let user = repo.find_by_email("nobody@example.com").await.unwrap();

    assert!(user.is_none());

    Ok(())
}
