use super::*;

/// Stores a digest of `password` under the test hash cost.
fn digest_of(password: &str) -> String {
    BcryptVerifier::new(TEST_HASH_COST)
        .hash(&Password::new(password))
        .unwrap()
        .into_inner()
}

/// Tests logging in with the right password.
///
/// Expected: Ok(()) after exactly one verification
#[tokio::test]
async fn accepts_matching_password() -> Result<(), TestError> {
    let (test, client) = client_for(
        Service::Auth,
        Script::new().on(Command::LogIn, Step::found(digest_of(STRONG_PASSWORD))),
    )
    .await?;
    let counting = CountingVerifier::new();
    let verifier: Arc<dyn CredentialVerifier> = counting.clone();

    AuthService::new(&client, &verifier)
        .log_in(login_params(EMAIL, STRONG_PASSWORD))
        .await
        .unwrap();

    assert_eq!(counting.verifications(), 1);
    assert!(!test.auth()?.received()[0]
        .payload
        .to_string()
        .contains(STRONG_PASSWORD));

    Ok(())
}

/// Tests logging in with the wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), TestError> {
    let (_test, client) = client_for(
        Service::Auth,
        Script::new().on(Command::LogIn, Step::found(digest_of(STRONG_PASSWORD))),
    )
    .await?;
    let counting = CountingVerifier::new();
    let verifier: Arc<dyn CredentialVerifier> = counting.clone();

    let result = AuthService::new(&client, &verifier)
        .log_in(login_params(EMAIL, "Wr0ng!pass"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert_eq!(counting.verifications(), 1);

    Ok(())
}

/// Tests logging in with an email that has no credentials.
///
/// Expected: Err(InvalidCredentials) without any password comparison
#[tokio::test]
async fn unknown_identity_skips_verification() -> Result<(), TestError> {
    let (_test, client) =
        client_for(Service::Auth, Script::new().on(Command::LogIn, Step::not_found())).await?;
    let counting = CountingVerifier::new();
    let verifier: Arc<dyn CredentialVerifier> = counting.clone();

    let result = AuthService::new(&client, &verifier)
        .log_in(login_params(UNKNOWN_EMAIL, STRONG_PASSWORD))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert_eq!(counting.verifications(), 0);

    Ok(())
}

/// Tests a stored value that is not a valid digest.
///
/// Expected: Err(InvalidCredentials), treated as a mismatch
#[tokio::test]
async fn corrupt_digest_is_rejected() -> Result<(), TestError> {
    let (_test, client) = client_for(
        Service::Auth,
        Script::new().on(Command::LogIn, Step::found(STRONG_PASSWORD)),
    )
    .await?;
    let verifier: Arc<dyn CredentialVerifier> = CountingVerifier::new();

    let result = AuthService::new(&client, &verifier)
        .log_in(login_params(EMAIL, STRONG_PASSWORD))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests an authentication service that does not answer.
///
/// Expected: Err(RpcErr) carrying a timeout, never InvalidCredentials
#[tokio::test]
async fn lookup_timeout_is_not_rejection() -> Result<(), TestError> {
    let (_test, client) =
        client_for(Service::Auth, Script::new().on(Command::LogIn, Step::Silence)).await?;
    let verifier: Arc<dyn CredentialVerifier> = CountingVerifier::new();

    let result = AuthService::new(&client, &verifier)
        .log_in(login_params(EMAIL, STRONG_PASSWORD))
        .await;

    assert!(matches!(result, Err(AppError::RpcErr(err)) if err.is_timeout()));

    Ok(())
}
