//! Signup and login flows.
//!
//! Signup hashes the password locally and sends only the digest to the authentication
//! service. Login drives a [`LoginState`] from `AwaitingLookup` to a terminal state; an
//! unknown email and a wrong password end in the same client-facing error.

use std::sync::Arc;

use crate::server::{
    data::credential::CredentialRepository,
    error::{auth::AuthError, AppError},
    model::auth::{LoginParams, LoginState, SignUpParams},
    rpc::ServiceClient,
    service::credential::{hash_blocking, verify_blocking, CredentialVerifier},
};

/// Service for credential registration and login.
pub struct AuthService<'a> {
    /// Client bound to the authentication service.
    client: &'a ServiceClient,
    /// Hashes and verifies passwords locally.
    verifier: &'a Arc<dyn CredentialVerifier>,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `client` - Client bound to the authentication service
    /// - `verifier` - Password hasher used for both flows
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(client: &'a ServiceClient, verifier: &'a Arc<dyn CredentialVerifier>) -> Self {
        Self { client, verifier }
    }

    /// Registers credentials for an email.
    ///
    /// Hashes the password, then sends the email and digest as a single `signUp` command.
    ///
    /// # Arguments
    /// - `params` - Email and plaintext password
    ///
    /// # Returns
    /// - `Ok(())` - Credentials stored
    /// - `Err(AppError::Conflict)` - The email already has credentials
    /// - `Err(AppError::RpcErr)` - The authentication service could not complete the command
    /// - `Err(AppError::InternalErr)` - Hashing failed
    pub async fn sign_up(&self, params: SignUpParams) -> Result<(), AppError> {
        let digest = hash_blocking(self.verifier.clone(), params.password.clone()).await?;

        let repo = CredentialRepository::new(self.client);
        let email = params.email.clone();

        if !repo.store(params, digest).await? {
            tracing::info!("Signup rejected, credentials already exist for {}", email);
            return Err(AppError::Conflict(
                "Credentials already exist for this email".to_string(),
            ));
        }

        tracing::info!("Registered credentials for {}", email);

        Ok(())
    }

    /// Checks a login attempt.
    ///
    /// Looks up the stored digest by email. When the authentication service has none the
    /// attempt is rejected without any password comparison; otherwise the password is
    /// verified against the digest.
    ///
    /// # Arguments
    /// - `params` - Email and plaintext password
    ///
    /// # Returns
    /// - `Ok(())` - The password matches the stored digest
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::RpcErr)` - The authentication service could not complete the lookup
    pub async fn log_in(&self, params: LoginParams) -> Result<(), AppError> {
        let repo = CredentialRepository::new(self.client);
        let mut state = LoginState::AwaitingLookup;

        while !state.is_terminal() {
            state = match state {
                LoginState::AwaitingLookup => {
                    LoginState::looked_up(repo.find_digest(&params).await?)
                }
                LoginState::Verifying(digest) => LoginState::verified(
                    verify_blocking(self.verifier.clone(), params.password.clone(), digest)
                        .await?,
                ),
                terminal => terminal,
            };
        }

        match state {
            LoginState::Accepted => {
                tracing::info!("Login accepted for {}", params.email);
                Ok(())
            }
            LoginState::Rejected(reason) => {
                tracing::info!("Login rejected for {}: {}", params.email, reason);
                Err(AuthError::InvalidCredentials.into())
            }
            _ => Err(AppError::InternalError(
                "Login flow ended in a non-terminal state".to_string(),
            )),
        }
    }
}
