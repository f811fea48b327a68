use super::*;

/// Tests deleting a user.
///
/// Expected: Ok(Some(User)) with the removed record
#[tokio::test]
async fn deletes_user() -> Result<(), TestError> {
    let record = UserFactory::new().email("ada@example.com").build();
    let (test, client) =
        data_client(Script::new().on(Command::DeleteUser, Step::found(&record))).await?;

    let repo = UserRepository::new(&client);
    let deleted = repo.delete("ada@example.com").await.unwrap();

    assert_eq!(deleted.map(|user| user.email), Some("ada@example.com".to_string()));
    assert_eq!(test.data()?.received_commands(), vec![Command::DeleteUser]);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), TestError> {
    let (_test, client) =
        data_client(Script::new().on(Command::DeleteUser, Step::not_found())).await?;

    let repo = UserRepository::new(&client);
    let deleted = repo.delete("nobody@example.com").await.unwrap();

    assert!(deleted.is_none());

    Ok(())
}
