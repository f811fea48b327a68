use super::*;

/// Tests logging in with the right password.
///
/// Expected: 200 with `{ email, authenticated: true }`
#[tokio::test]
async fn logs_in() -> Result<(), TestError> {
    let (_test, app) = auth_gateway(
        Script::new().on(Command::LogIn, Step::found(digest_of(STRONG_PASSWORD))),
    )
    .await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(request::credentials(EMAIL, STRONG_PASSWORD)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "email": EMAIL, "authenticated": true }));

    Ok(())
}

/// Tests that an unknown email and a wrong password look the same to the client.
///
/// Expected: identical 401 responses
#[tokio::test]
async fn rejections_are_indistinguishable() -> Result<(), TestError> {
    let (test, app) = auth_gateway(
        Script::new().on(Command::LogIn, Step::found(digest_of(STRONG_PASSWORD))),
    )
    .await?;

    let wrong_password = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(request::credentials(EMAIL, "Wr0ng!pass")),
    )
    .await;

    test.auth()?.respond(Command::LogIn, Step::not_found());
    let unknown_email = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(request::credentials(UNKNOWN_EMAIL, STRONG_PASSWORD)),
    )
    .await;

    assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password.1["error"], "Invalid email or password");

    Ok(())
}

/// Tests an empty password.
///
/// Expected: 400 and no command sent
#[tokio::test]
async fn rejects_empty_password() -> Result<(), TestError> {
    let (test, app) = auth_gateway(Script::new()).await?;

    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(request::credentials(EMAIL, "")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(test.auth()?.received().is_empty());

    Ok(())
}

/// Tests an authentication service that never answers.
///
/// Expected: 504, not 401
#[tokio::test]
async fn silent_backend_is_gateway_timeout() -> Result<(), TestError> {
    let (_test, app) = auth_gateway(Script::new().on(Command::LogIn, Step::Silence)).await?;

    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(request::credentials(EMAIL, STRONG_PASSWORD)),
    )
    .await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);

    Ok(())
}
