use super::*;

/// Tests retrieving an existing user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn gets_existing_user() -> Result<(), TestError> {
    let record = UserFactory::new().email("ada@example.com").build();
    let (_test, client) =
        client_for(Service::Data, Script::new().on(Command::FindUser, Step::found(&record)))
            .await?;

    let user = UserService::new(&client)
        .get_by_email("ada@example.com")
        .await
        .unwrap();

    assert_eq!(user.id, record.id);

    Ok(())
}

/// Tests retrieving an unknown user.
///
/// Expected: Err(NotFound("User not found"))
#[tokio::test]
async fn maps_absence_to_not_found() -> Result<(), TestError> {
    let (_test, client) =
        client_for(Service::Data, Script::new().on(Command::FindUser, Step::not_found())).await?;

    let result = UserService::new(&client).get_by_email("nobody@example.com").await;

    assert!(matches!(result, Err(AppError::NotFound(message)) if message == "User not found"));

    Ok(())
}

/// Tests a backend failure during lookup.
///
/// Expected: Err(RpcErr), never NotFound
#[tokio::test]
async fn backend_error_is_not_absence() -> Result<(), TestError> {
    let (_test, client) = client_for(
        Service::Data,
        Script::new().on(Command::FindUser, Step::error("connection pool exhausted")),
    )
    .await?;

    let result = UserService::new(&client).get_by_email("ada@example.com").await;

    assert!(matches!(result, Err(AppError::RpcErr(_))));

    Ok(())
}
