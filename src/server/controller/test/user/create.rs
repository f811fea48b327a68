use super::*;

/// Tests creating a user through the HTTP surface.
///
/// Expected: 201 with the created user and one `createUser` command
#[tokio::test]
async fn creates_user() -> Result<(), TestError> {
    let record = UserFactory::new().email("ada@example.com").build();
    let (test, app) =
        data_gateway(Script::new().on(Command::CreateUser, Step::found(&record))).await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(request::create_user("ada@example.com")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], record.id);
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(test.data()?.received_commands(), vec![Command::CreateUser]);

    Ok(())
}

/// Tests a create followed by deleting an email the backend does not know.
///
/// Expected: 201 for the create, then 404 for the delete
#[tokio::test]
async fn create_then_delete_unknown_is_not_found() -> Result<(), TestError> {
    let record = UserFactory::new().email("ada@example.com").build();
    let (_test, app) = data_gateway(
        Script::new()
            .on(Command::CreateUser, Step::found(&record))
            .on(Command::DeleteUser, Step::not_found()),
    )
    .await?;

    let (created, _) = send(
        &app,
        Method::POST,
        "/users",
        Some(request::create_user("ada@example.com")),
    )
    .await;
    let (deleted, body) = send(&app, Method::DELETE, "/users/nobody@example.com", None).await;

    assert_eq!(created, StatusCode::CREATED);
    assert_eq!(deleted, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found to delete");

    Ok(())
}

/// Tests invalid user data.
///
/// Expected: 400 for each body and no command sent
#[tokio::test]
async fn rejects_invalid_user_before_sending() -> Result<(), TestError> {
    let (test, app) = data_gateway(Script::new()).await?;

    let bodies = [
        json!({ "name": "Ada", "email": "not-an-email" }),
        json!({ "name": "   ", "email": "ada@example.com" }),
        json!({ "name": "Ada", "email": "ada@example.com", "avatarUrl": "ftp://x" }),
        json!({ "name": "Ada", "email": "ada@example.com", "projectId": 0 }),
        json!({ "email": "ada@example.com" }),
    ];

    for body in bodies {
        let (status, response) = send(&app, Method::POST, "/users", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {}", body);
        assert!(response["error"].is_string());
    }
    assert!(test.data()?.received().is_empty());

    Ok(())
}

/// Tests a body that is not JSON.
///
/// Expected: 400
#[tokio::test]
async fn rejects_malformed_json() -> Result<(), TestError> {
    let (test, app) = data_gateway(Script::new()).await?;

    let status = send_raw(&app, Method::POST, "/users", "{\"name\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(test.data()?.received().is_empty());

    Ok(())
}

/// Tests a data service that reports a failure.
///
/// Expected: 502 with a generic message that hides the backend's text
#[tokio::test]
async fn backend_error_is_bad_gateway() -> Result<(), TestError> {
    let (_test, app) = data_gateway(
        Script::new().on(Command::CreateUser, Step::error("duplicate key value")),
    )
    .await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(request::create_user("ada@example.com")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Backend service unavailable");
    assert!(!body.to_string().contains("duplicate"));

    Ok(())
}
