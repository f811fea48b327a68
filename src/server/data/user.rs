//! User data repository.
//!
//! This module provides the `UserRepository` for managing user records held by the data
//! service. Users are keyed by email: lookups, updates and deletes send the email, not the
//! numeric id.

use protocol::{
    record::{user::UserRecord, NoPayload},
    Command,
};

use crate::server::{
    model::user::{CreateUserParams, UpdateUserParams, User},
    rpc::{RpcError, ServiceClient},
};

/// Repository providing user operations against the data service.
pub struct UserRepository<'a> {
    client: &'a ServiceClient,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `client` - Client bound to the data service
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Creates a user.
    ///
    /// # Arguments
    /// - `params` - Name, email and optional avatar and project of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its backend-assigned id
    /// - `Err(RpcError)` - The command could not be completed, including a not-found
    ///   reply, which a create never legitimately produces
    pub async fn create(&self, params: CreateUserParams) -> Result<User, RpcError> {
        let record: UserRecord = self
            .client
            .expect(Command::CreateUser, &params.into_record())
            .await?;

        Ok(User::from_record(record))
    }

    /// Lists every user.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users, possibly none
    /// - `Err(RpcError)` - The command could not be completed
    pub async fn get_all(&self) -> Result<Vec<User>, RpcError> {
        let records: Vec<UserRecord> = self
            .client
            .list(Command::AllUsers, &NoPayload {})
            .await?;

        Ok(records.into_iter().map(User::from_record).collect())
    }

    /// Finds a user by email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user has that email
    /// - `Err(RpcError)` - The command could not be completed
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, RpcError> {
        let record: Option<UserRecord> = self.client.find(Command::FindUser, email).await?;

        Ok(record.map(User::from_record))
    }

    /// Applies a partial update to the user with the params' email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user has that email
    /// - `Err(RpcError)` - The command could not be completed
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, RpcError> {
        let record: Option<UserRecord> = self
            .client
            .find(Command::EditUser, &params.into_record())
            .await?;

        Ok(record.map(User::from_record))
    }

    /// Deletes the user with `email`.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The deleted user
    /// - `Ok(None)` - No user has that email
    /// - `Err(RpcError)` - The command could not be completed
    pub async fn delete(&self, email: &str) -> Result<Option<User>, RpcError> {
        let record: Option<UserRecord> = self.client.find(Command::DeleteUser, email).await?;

        Ok(record.map(User::from_record))
    }
}
