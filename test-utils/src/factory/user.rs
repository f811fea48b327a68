//! User record factory.

use protocol::record::user::UserRecord;

use super::helpers::{next_id, timestamp};

/// Factory for user records.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new().email("ada@example.com").build();
/// ```
pub struct UserFactory {
    record: UserRecord,
}

impl UserFactory {
    /// Defaults: unique id, name `"User {id}"`, email `"user{id}@example.com"`, no avatar
    /// and no project.
    pub fn new() -> Self {
        let id = next_id();
        Self {
            record: UserRecord {
                id,
                name: format!("User {}", id),
                email: format!("user{}@example.com", id),
                avatar_url: None,
                created_at: timestamp(),
                updated_at: timestamp(),
                project_id: None,
            },
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.record.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.record.email = email.into();
        self
    }

    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.record.avatar_url = Some(avatar_url.into());
        self
    }

    pub fn project_id(mut self, project_id: i32) -> Self {
        self.record.project_id = Some(project_id);
        self
    }

    pub fn build(self) -> UserRecord {
        self.record
    }
}

impl Default for UserFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a user record with default values.
pub fn create_user() -> UserRecord {
    UserFactory::new().build()
}
