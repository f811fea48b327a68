//! Request fixtures for HTTP-level tests.
//!
//! Fixtures are JSON request bodies exactly as a client would send them to the gateway,
//! plus credentials that pass or fail the signup password rules. Unlike factories they
//! describe gateway input, not backend output.

pub mod credential;
pub mod request;
