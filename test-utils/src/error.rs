use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// The mock backend could not bind or accept connections.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The test asked for a backend that was not configured on the builder.
    ///
    /// Add it with `with_data_service()` or `with_auth_service()` before `build()`.
    #[error("Mock {0} service was not configured for this test")]
    MissingBackend(&'static str),

    /// The backend did not observe the expected traffic in time.
    #[error("Timed out waiting for {expected} requests, received {received}")]
    WaitTimedOut { expected: usize, received: usize },
}
