//! Issue record factory.

use protocol::record::{
    enums::{IssuePriority, IssueStatus, IssueType},
    issue::IssueRecord,
    user::UserRecord,
};

use super::helpers::{next_id, timestamp};

pub struct IssueFactory {
    record: IssueRecord,
}

impl IssueFactory {
    /// Defaults: unique id, backlog task of medium priority in project 1 reported by user 1,
    /// with no joined reporter.
    pub fn new() -> Self {
        let id = next_id();
        Self {
            record: IssueRecord {
                id,
                title: format!("Issue {}", id),
                kind: IssueType::Task,
                status: IssueStatus::Backlog,
                priority: IssuePriority::Medium,
                list_position: 1.0,
                description: None,
                description_text: None,
                estimate: None,
                time_spent: None,
                time_remaining: None,
                created_at: timestamp(),
                updated_at: timestamp(),
                project_id: 1,
                user_id: 1,
                user: None,
            },
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.record.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.record.title = title.into();
        self
    }

    pub fn priority(mut self, priority: IssuePriority) -> Self {
        self.record.priority = priority;
        self
    }

    pub fn status(mut self, status: IssueStatus) -> Self {
        self.record.status = status;
        self
    }

    pub fn project_id(mut self, project_id: i32) -> Self {
        self.record.project_id = project_id;
        self
    }

    /// Joins a reporter onto the record and points `userId` at it.
    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.record.user_id = user.id;
        self.record.user = Some(user);
        self
    }

    pub fn build(self) -> IssueRecord {
        self.record
    }
}

impl Default for IssueFactory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_issue() -> IssueRecord {
    IssueFactory::new().build()
}
