//! Credential fixtures.

/// Email accepted by the gateway's identity validation.
pub const EMAIL: &str = "ada@example.com";

/// Password meeting the signup strength rules.
pub const STRONG_PASSWORD: &str = "Str0ng!pass";

/// Password too weak for signup: no upper-case letter, digit or symbol.
pub const WEAK_PASSWORD: &str = "password";

/// Identity the mock authentication service has never seen.
pub const UNKNOWN_EMAIL: &str = "nobody@example.com";
