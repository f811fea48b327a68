use super::*;

/// Tests updating an unknown user.
///
/// Expected: Err(NotFound("User not found to update"))
#[tokio::test]
async fn maps_absence_to_not_found() -> Result<(), TestError> {
    let (_test, client) =
        client_for(Service::Data, Script::new().on(Command::EditUser, Step::not_found())).await?;

    let result = UserService::new(&client)
        .update(UpdateUserParams {
            email: "nobody@example.com".to_string(),
            name: Some("Nobody".to_string()),
            avatar_url: None,
            project_id: None,
        })
        .await;

    assert!(
        matches!(result, Err(AppError::NotFound(message)) if message == "User not found to update")
    );

    Ok(())
}
