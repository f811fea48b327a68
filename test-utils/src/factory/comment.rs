//! Comment record factory.

use protocol::record::{comment::CommentRecord, user::UserRecord};

use super::helpers::{next_id, timestamp};

pub struct CommentFactory {
    record: CommentRecord,
}

impl CommentFactory {
    /// Defaults: unique id on issue 1 by user 1, with no joined author.
    pub fn new() -> Self {
        let id = next_id();
        Self {
            record: CommentRecord {
                id,
                body: format!("Comment {}", id),
                created_at: timestamp(),
                updated_at: timestamp(),
                issue_id: 1,
                user_id: 1,
                user: None,
            },
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.record.id = id;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.record.body = body.into();
        self
    }

    pub fn issue_id(mut self, issue_id: i32) -> Self {
        self.record.issue_id = issue_id;
        self
    }

    /// Joins an author onto the record and points `userId` at it.
    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.record.user_id = user.id;
        self.record.user = Some(user);
        self
    }

    pub fn build(self) -> CommentRecord {
        self.record
    }
}

impl Default for CommentFactory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_comment() -> CommentRecord {
    CommentFactory::new().build()
}
