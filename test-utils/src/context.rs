use crate::{backend::MockBackend, error::TestError};

/// Running mock backends for one test.
///
/// Backends shut down when the context is dropped.
pub struct TestContext {
    /// Mock data service, if configured.
    pub data: Option<MockBackend>,

    /// Mock authentication service, if configured.
    pub auth: Option<MockBackend>,
}

impl TestContext {
    pub fn new(data: Option<MockBackend>, auth: Option<MockBackend>) -> Self {
        Self { data, auth }
    }

    /// Gets the mock data service.
    ///
    /// # Returns
    /// - `Ok(&MockBackend)` - The running data service
    /// - `Err(TestError::MissingBackend)` - The builder did not configure one
    pub fn data(&self) -> Result<&MockBackend, TestError> {
        self.data.as_ref().ok_or(TestError::MissingBackend("data"))
    }

    /// Gets the mock authentication service.
    ///
    /// # Returns
    /// - `Ok(&MockBackend)` - The running authentication service
    /// - `Err(TestError::MissingBackend)` - The builder did not configure one
    pub fn auth(&self) -> Result<&MockBackend, TestError> {
        self.auth.as_ref().ok_or(TestError::MissingBackend("auth"))
    }
}
