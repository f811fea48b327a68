//! Credential parameters and the login state machine.
//!
//! Plaintext passwords and digests are wrapped in types whose `Debug` output is redacted,
//! so neither can reach a log line through a `{:?}`.

use protocol::record::credential::{LogIn, SignUp};

use crate::{
    model::auth::{LoginRequestDto, SignUpRequestDto},
    server::{
        error::AppError,
        util::validate::{self, Validate},
    },
};

/// Plaintext password as submitted by the client.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Salted bcrypt digest of a password.
#[derive(Clone, PartialEq, Eq)]
pub struct Digest(String);

impl Digest {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Digest(<redacted>)")
    }
}

/// Parameters for registering credentials.
#[derive(Debug, Clone)]
pub struct SignUpParams {
    pub email: String,
    pub password: Password,
}

impl SignUpParams {
    pub fn from_dto(dto: SignUpRequestDto) -> Self {
        Self {
            email: dto.email,
            password: Password::new(dto.pass),
        }
    }

    /// Builds the `signUp` payload. Only the digest leaves the gateway.
    pub fn into_record(self, digest: Digest) -> SignUp {
        SignUp {
            email: self.email,
            pass: digest.into_inner(),
        }
    }
}

/// Parameters for a login attempt.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: Password,
}

impl LoginParams {
    pub fn from_dto(dto: LoginRequestDto) -> Self {
        Self {
            email: dto.email,
            password: Password::new(dto.pass),
        }
    }

    /// Builds the `logIn` lookup payload.
    pub fn lookup(&self) -> LogIn {
        LogIn {
            email: self.email.clone(),
        }
    }
}

/// Why a login was rejected. Logged, never returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The authentication service has no credentials for the email.
    UnknownIdentity,
    /// The password does not match the stored digest.
    WrongPassword,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::UnknownIdentity => f.write_str("unknown identity"),
            RejectReason::WrongPassword => f.write_str("wrong password"),
        }
    }
}

/// Progress of one login attempt.
///
/// `AwaitingLookup` moves to `Verifying` once a stored digest is found, or straight to
/// `Rejected(UnknownIdentity)` when there is none, without any password comparison.
/// `Verifying` ends in `Accepted` or `Rejected(WrongPassword)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    AwaitingLookup,
    Verifying(Digest),
    Accepted,
    Rejected(RejectReason),
}

impl LoginState {
    /// State after the digest lookup returned `digest`.
    pub fn looked_up(digest: Option<Digest>) -> Self {
        match digest {
            Some(digest) => LoginState::Verifying(digest),
            None => LoginState::Rejected(RejectReason::UnknownIdentity),
        }
    }

    /// State after comparing the password against the stored digest.
    pub fn verified(matches: bool) -> Self {
        if matches {
            LoginState::Accepted
        } else {
            LoginState::Rejected(RejectReason::WrongPassword)
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LoginState::Accepted | LoginState::Rejected(_))
    }
}

impl Validate for SignUpRequestDto {
    fn validate(&self) -> Result<(), AppError> {
        validate::email("email", &self.email)?;
        validate::strong_password("pass", &self.pass)
    }
}

impl Validate for LoginRequestDto {
    fn validate(&self) -> Result<(), AppError> {
        validate::email("email", &self.email)?;
        validate::required("pass", &self.pass)?;
        validate::password_len("pass", &self.pass)
    }
}
