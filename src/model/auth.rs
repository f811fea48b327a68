use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /auth/signup`.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SignUpRequestDto {
    pub email: String,
    /// Plaintext password; hashed by the gateway and never forwarded.
    pub pass: String,
}

/// Body of `POST /auth/login`.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LoginRequestDto {
    pub email: String,
    pub pass: String,
}

impl std::fmt::Debug for SignUpRequestDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpRequestDto")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for LoginRequestDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequestDto")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SignUpDto {
    pub email: String,
    pub created: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub authenticated: bool,
}
