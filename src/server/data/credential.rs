//! Credential repository over the authentication service.

use protocol::Command;

use crate::server::{
    model::auth::{Digest, LoginParams, SignUpParams},
    rpc::{RpcError, ServiceClient},
};

pub struct CredentialRepository<'a> {
    client: &'a ServiceClient,
}

impl<'a> CredentialRepository<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Stores `digest` as the credential for the params' email.
    ///
    /// # Returns
    /// - `Ok(true)` - Credentials stored
    /// - `Ok(false)` - The email already has credentials
    /// - `Err(RpcError)` - The command could not be completed
    pub async fn store(&self, params: SignUpParams, digest: Digest) -> Result<bool, RpcError> {
        self.client
            .expect(Command::SignUp, &params.into_record(digest))
            .await
    }

    /// Looks up the stored digest for the params' email.
    ///
    /// # Returns
    /// - `Ok(Some(Digest))` - Stored digest
    /// - `Ok(None)` - The email has no credentials
    /// - `Err(RpcError)` - The command could not be completed
    pub async fn find_digest(&self, params: &LoginParams) -> Result<Option<Digest>, RpcError> {
        let digest: Option<String> = self.client.find(Command::LogIn, &params.lookup()).await?;

        Ok(digest.map(Digest::new))
    }
}
