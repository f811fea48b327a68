use crate::{
    backend::{MockBackend, Script},
    context::TestContext,
    error::TestError,
};

/// Builder for creating test contexts with scripted backends.
///
/// Only the backends a test configures are started; asking the resulting context for an
/// unconfigured one yields `TestError::MissingBackend`.
///
/// # Example
///
/// ```rust,ignore
/// use protocol::Command;
/// use test_utils::{backend::{Script, Step}, builder::TestBuilder};
///
/// let test = TestBuilder::new()
///     .with_data_service(Script::new().on(Command::AllUsers, Step::found(Vec::<()>::new())))
///     .with_auth_service(Script::new())
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    data: Option<Script>,
    auth: Option<Script>,
}

impl TestBuilder {
    /// Creates a new test builder with no backends configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a mock data service answering according to `script`.
    pub fn with_data_service(mut self, script: Script) -> Self {
        self.data = Some(script);
        self
    }

    /// Starts a mock authentication service answering according to `script`.
    pub fn with_auth_service(mut self, script: Script) -> Self {
        self.auth = Some(script);
        self
    }

    /// Starts whichever backends are not configured yet with empty scripts.
    pub fn with_both_services(mut self) -> Self {
        self.data.get_or_insert_with(Script::new);
        self.auth.get_or_insert_with(Script::new);
        self
    }

    /// Binds and starts every configured backend.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running backends ready to accept gateway connections
    /// - `Err(TestError::Io)` - A backend failed to bind a local port
    pub async fn build(self) -> Result<TestContext, TestError> {
        let data = match self.data {
            Some(script) => Some(MockBackend::spawn(script).await?),
            None => None,
        };
        let auth = match self.auth {
            Some(script) => Some(MockBackend::spawn(script).await?),
            None => None,
        };

        Ok(TestContext::new(data, auth))
    }
}
