use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use test_utils::fixture::credential::{EMAIL, STRONG_PASSWORD, UNKNOWN_EMAIL};

use super::*;
use crate::server::{
    error::{auth::AuthError, internal::InternalError},
    model::auth::{Digest, LoginParams, Password, SignUpParams},
    service::{
        auth::AuthService,
        credential::{BcryptVerifier, CredentialVerifier},
    },
    testing::TEST_HASH_COST,
};

mod log_in;

/// Bcrypt verifier that counts how often each operation runs.
#[derive(Default)]
struct CountingVerifier {
    inner: BcryptVerifier,
    hashes: AtomicUsize,
    verifications: AtomicUsize,
}

impl CountingVerifier {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: BcryptVerifier::new(TEST_HASH_COST),
            ..Default::default()
        })
    }

    fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

impl CredentialVerifier for CountingVerifier {
    fn hash(&self, password: &Password) -> Result<Digest, InternalError> {
        self.hashes.fetch_add(1, Ordering::SeqCst);
        self.inner.hash(password)
    }

    fn verify(&self, password: &Password, digest: &Digest) -> bool {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        self.inner.verify(password, digest)
    }
}

fn sign_up_params(email: &str, password: &str) -> SignUpParams {
    SignUpParams {
        email: email.to_string(),
        password: Password::new(password),
    }
}

fn login_params(email: &str, password: &str) -> LoginParams {
    LoginParams {
        email: email.to_string(),
        password: Password::new(password),
    }
}
