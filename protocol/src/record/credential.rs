//! Authentication service payloads.
//!
//! The plaintext password never appears here: `signUp` carries the digest computed by the
//! gateway and `logIn` only asks for the stored digest.

use serde::{Deserialize, Serialize};

/// Payload of `signUp`. The backend replies `true` when the identity was created and
/// `false` when it already exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUp {
    pub email: String,
    /// bcrypt digest of the password.
    pub pass: String,
}

/// Payload of `logIn`. The backend replies with the stored digest or `notFound`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogIn {
    pub email: String,
}
