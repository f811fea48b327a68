use super::*;

/// Tests storing new credentials.
///
/// Verifies that the `signUp` payload carries the digest and never the plaintext.
///
/// Expected: Ok(true)
#[tokio::test]
async fn stores_digest_not_plaintext() -> Result<(), TestError> {
    let (test, client) = auth_client(Script::new().on(Command::SignUp, Step::found(true))).await?;

    let repo = CredentialRepository::new(&client);
    let stored = repo
        .store(
            SignUpParams {
                email: EMAIL.to_string(),
                password: Password::new(STRONG_PASSWORD),
            },
            Digest::new("$2b$04$digest"),
        )
        .await
        .unwrap();

    assert!(stored);

    let sent = &test.auth()?.received()[0];
    assert_eq!(sent.payload, json!({ "email": EMAIL, "pass": "$2b$04$digest" }));
    assert!(!sent.payload.to_string().contains(STRONG_PASSWORD));

    Ok(())
}

/// Tests storing credentials for an email that already has them.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_existing_credentials() -> Result<(), TestError> {
    let (_test, client) =
        auth_client(Script::new().on(Command::SignUp, Step::found(false))).await?;

    let repo = CredentialRepository::new(&client);
    let stored = repo
        .store(
            SignUpParams {
                email: EMAIL.to_string(),
                password: Password::new(STRONG_PASSWORD),
            },
            Digest::new("$2b$04$digest"),
        )
        .await
        .unwrap();

    assert!(!stored);

    Ok(())
}
