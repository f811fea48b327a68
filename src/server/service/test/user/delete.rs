use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok(User) with the removed record
#[tokio::test]
async fn returns_deleted_user() -> Result<(), TestError> {
    let record = UserFactory::new().email("ada@example.com").build();
    let (_test, client) =
        client_for(Service::Data, Script::new().on(Command::DeleteUser, Step::found(&record)))
            .await?;

    let user = UserService::new(&client).delete("ada@example.com").await.unwrap();

    assert_eq!(user.email, "ada@example.com");

    Ok(())
}

/// Tests deleting an unknown user.
///
/// Expected: Err(NotFound("User not found to delete"))
#[tokio::test]
async fn maps_absence_to_not_found() -> Result<(), TestError> {
    let (_test, client) =
        client_for(Service::Data, Script::new().on(Command::DeleteUser, Step::not_found()))
            .await?;

    let result = UserService::new(&client).delete("nobody@example.com").await;

    assert!(
        matches!(result, Err(AppError::NotFound(message)) if message == "User not found to delete")
    );

    Ok(())
}
