use super::*;

/// Tests a partial user update.
///
/// Expected: 200 with the updated user and only the supplied field sent
#[tokio::test]
async fn updates_user() -> Result<(), TestError> {
    let record = UserFactory::new()
        .email("ada@example.com")
        .name("Countess of Lovelace")
        .build();
    let (test, app) =
        data_gateway(Script::new().on(Command::EditUser, Step::found(&record))).await?;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/users/ada@example.com",
        Some(json!({ "name": "Countess of Lovelace" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Countess of Lovelace");
    assert_eq!(
        test.data()?.received()[0].payload,
        json!({ "email": "ada@example.com", "changes": { "name": "Countess of Lovelace" } })
    );

    Ok(())
}

/// Tests an update with nothing to change.
///
/// Expected: 400 and no command sent
#[tokio::test]
async fn rejects_empty_update() -> Result<(), TestError> {
    let (test, app) = data_gateway(Script::new()).await?;

    let (status, body) = send(&app, Method::PATCH, "/users/ada@example.com", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No fields to update");
    assert!(test.data()?.received().is_empty());

    Ok(())
}

/// Tests updating an unknown user.
///
/// Expected: 404
#[tokio::test]
async fn unknown_user_is_not_found() -> Result<(), TestError> {
    let (_test, app) =
        data_gateway(Script::new().on(Command::EditUser, Step::not_found())).await?;

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/users/nobody@example.com",
        Some(json!({ "name": "Nobody" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
