use thiserror::Error;

/// Internal failures on the gateway itself, as opposed to failures of a backend.
#[derive(Error, Debug)]
pub enum InternalError {
    /// bcrypt failed to produce a digest.
    ///
    /// Only happens for an out-of-range cost or a failing random source. Results in a
    /// 500 Internal Server Error with a generic message returned to the client.
    #[error("Failed to hash password: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// A blocking hash task panicked or was cancelled before finishing.
    #[error("Password hashing task did not complete: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}
