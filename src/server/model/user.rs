//! User domain models and parameters.
//!
//! Users are addressed by email on the HTTP surface; the backend assigns the numeric id.

use chrono::{DateTime, Utc};
use protocol::record::user::{EditUser, NewUser, UserChanges, UserRecord};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        error::AppError,
        util::validate::{self, Validate, USER_NAME_MAX},
    },
};

/// Registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Unique key used by the HTTP surface.
    pub email: String,
    pub avatar_url: Option<String>,
    /// Project the user currently belongs to, if any.
    pub project_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            avatar_url: self.avatar_url,
            project_id: self.project_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts a backend record to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `record` - The user record returned by the data service
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_record(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            avatar_url: record.avatar_url,
            project_id: record.project_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub project_id: Option<i32>,
}

impl CreateUserParams {
    /// Builds params from a validated request body, trimming the display name.
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email,
            avatar_url: dto.avatar_url,
            project_id: dto.project_id,
        }
    }

    /// Converts into the `createUser` payload.
    pub fn into_record(self) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
            avatar_url: self.avatar_url,
            project_id: self.project_id,
        }
    }
}

/// Parameters for a partial update of the user with `email`.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub project_id: Option<i32>,
}

impl UpdateUserParams {
    pub fn from_dto(email: String, dto: UpdateUserDto) -> Self {
        Self {
            email,
            name: dto.name.map(|name| name.trim().to_string()),
            avatar_url: dto.avatar_url,
            project_id: dto.project_id,
        }
    }

    /// Converts into the `editUser` payload.
    pub fn into_record(self) -> EditUser {
        EditUser {
            email: self.email,
            changes: UserChanges {
                name: self.name,
                avatar_url: self.avatar_url,
                project_id: self.project_id,
            },
        }
    }
}

impl Validate for CreateUserDto {
    fn validate(&self) -> Result<(), AppError> {
        validate::text("name", &self.name, USER_NAME_MAX)?;
        validate::email("email", &self.email)?;
        validate::optional(self.avatar_url.as_deref(), |url| {
            validate::http_url("avatarUrl", url)
        })?;
        if let Some(project_id) = self.project_id {
            validate::id("projectId", project_id)?;
        }
        Ok(())
    }
}

impl Validate for UpdateUserDto {
    fn validate(&self) -> Result<(), AppError> {
        if self.name.is_none() && self.avatar_url.is_none() && self.project_id.is_none() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }
        validate::optional(self.name.as_deref(), |name| {
            validate::text("name", name, USER_NAME_MAX)
        })?;
        validate::optional(self.avatar_url.as_deref(), |url| {
            validate::http_url("avatarUrl", url)
        })?;
        if let Some(project_id) = self.project_id {
            validate::id("projectId", project_id)?;
        }
        Ok(())
    }
}
