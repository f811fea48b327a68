//! Password hashing and verification.
//!
//! Digests are bcrypt strings carrying their own salt and cost, so verification needs only
//! the password and the stored digest. Comparison is bcrypt's own: the password is hashed
//! again under the stored salt and the full outputs are compared, never a byte-wise early
//! exit on the digest text.

use std::sync::Arc;

use crate::server::{
    error::{internal::InternalError, AppError},
    model::auth::{Digest, Password},
};

/// bcrypt cost used when none is configured.
pub const DEFAULT_HASH_COST: u32 = 10;

/// One-way transformation and verification of passwords.
///
/// Both operations are CPU-bound; callers on the async runtime go through
/// [`hash_blocking`] and [`verify_blocking`].
pub trait CredentialVerifier: Send + Sync {
    /// Produces a salted digest; two calls with the same password yield different digests.
    fn hash(&self, password: &Password) -> Result<Digest, InternalError>;

    /// True iff `digest` was produced from `password`.
    ///
    /// A digest that cannot be parsed never matches.
    fn verify(&self, password: &Password, digest: &Digest) -> bool;
}

/// bcrypt-backed verifier.
#[derive(Debug, Clone, Copy)]
pub struct BcryptVerifier {
    cost: u32,
}

impl BcryptVerifier {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_COST)
    }
}

impl CredentialVerifier for BcryptVerifier {
    fn hash(&self, password: &Password) -> Result<Digest, InternalError> {
        let digest = bcrypt::hash(password.expose(), self.cost)?;

        Ok(Digest::new(digest))
    }

    fn verify(&self, password: &Password, digest: &Digest) -> bool {
        match bcrypt::verify(password.expose(), digest.as_str()) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!("Stored digest could not be verified: {}", e);
                false
            }
        }
    }
}

/// Hashes `password` on the blocking thread pool.
pub async fn hash_blocking(
    verifier: Arc<dyn CredentialVerifier>,
    password: Password,
) -> Result<Digest, AppError> {
    let digest = tokio::task::spawn_blocking(move || verifier.hash(&password))
        .await
        .map_err(InternalError::from)??;

    Ok(digest)
}

/// Verifies `password` against `digest` on the blocking thread pool.
pub async fn verify_blocking(
    verifier: Arc<dyn CredentialVerifier>,
    password: Password,
    digest: Digest,
) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || verifier.verify(&password, &digest))
        .await
        .map_err(InternalError::from)?;

    Ok(matches)
}
