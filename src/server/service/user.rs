//! User service for business logic.
//!
//! This module provides the `UserService`, which forwards user operations to the data
//! service and maps absent users to `NotFound` errors.

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
    rpc::ServiceClient,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    client: &'a ServiceClient,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `client` - Client bound to the data service
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Creates a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::RpcErr)` - The data service could not complete the command
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.client);

        Ok(repo.create(params).await?)
    }

    /// Lists all users; an empty list is a valid result.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.client);

        Ok(repo.get_all().await?)
    }

    /// Retrieves a user by email.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user has that email
    /// - `Err(AppError::RpcErr)` - The data service could not complete the command
    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.client);

        repo.find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies a partial update to a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user has that email
    /// - `Err(AppError::RpcErr)` - The data service could not complete the command
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.client);

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found to update".to_string()))
    }

    /// Deletes a user and returns the removed record.
    ///
    /// # Returns
    /// - `Ok(User)` - The deleted user
    /// - `Err(AppError::NotFound)` - No user has that email
    /// - `Err(AppError::RpcErr)` - The data service could not complete the command
    pub async fn delete(&self, email: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.client);

        repo.delete(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found to delete".to_string()))
    }
}
