//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Client for the data service, shared by every CRUD endpoint
//! - Client for the authentication service
//! - Credential verifier used on the signup and login paths

use std::sync::Arc;

use crate::server::{rpc::ServiceClient, service::credential::CredentialVerifier};

/// Application state containing shared resources and dependencies.
///
/// Both clients wrap an `Arc` around their channel, so cloning the state shares the
/// underlying connections rather than opening new ones.
#[derive(Clone)]
pub struct AppState {
    /// Client for the data service.
    ///
    /// Carries every user, project, issue and comment command over one multiplexed
    /// connection.
    pub data: ServiceClient,

    /// Client for the authentication service.
    ///
    /// Carries the `signUp` and `logIn` commands.
    pub auth: ServiceClient,

    /// Password hasher used for signup and login.
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after both backend channels
    /// are connected. The resulting state is then provided to the Axum router for use in
    /// request handlers.
    ///
    /// # Arguments
    /// - `data` - Client bound to the data service
    /// - `auth` - Client bound to the authentication service
    /// - `verifier` - Credential verifier
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        data: ServiceClient,
        auth: ServiceClient,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            data,
            auth,
            verifier,
        }
    }
}
