//! Issue domain models and parameters.
//!
//! An issue belongs to one project and has one reporter. The data service may join the
//! reporter onto the record; when it does, the issue carries it as `user`.

use chrono::{DateTime, Utc};
use protocol::record::{
    enums::{IssuePriority, IssueStatus, IssueType},
    issue::{IssueChanges, IssueRecord, NewIssue},
    EditById,
};

use crate::{
    model::issue::{CreateIssueDto, IssueDto, UpdateIssueDto},
    server::{
        error::AppError,
        model::user::User,
        util::validate::{self, Validate, ISSUE_TITLE_MAX, ISSUE_DESCRIPTION_MAX},
    },
};

/// Tracked unit of work.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: i32,
    pub title: String,
    pub kind: IssueType,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    /// Ordering key within the issue's status column.
    pub list_position: f64,
    /// Rich-text description.
    pub description: Option<String>,
    /// Plain-text rendering of `description`, used for search.
    pub description_text: Option<String>,
    /// Estimated hours.
    pub estimate: Option<i32>,
    pub time_spent: Option<i32>,
    pub time_remaining: Option<i32>,
    pub project_id: i32,
    pub user_id: i32,
    /// Reporter, when joined by the backend.
    pub user: Option<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    /// Converts the issue domain model to a DTO for API responses.
    ///
    /// The reporter is converted along with the issue whenever it is present.
    ///
    /// # Returns
    /// - `IssueDto` - The converted issue DTO
    pub fn into_dto(self) -> IssueDto {
        IssueDto {
            id: self.id,
            title: self.title,
            kind: self.kind,
            status: self.status,
            priority: self.priority,
            list_position: self.list_position,
            description: self.description,
            description_text: self.description_text,
            estimate: self.estimate,
            time_spent: self.time_spent,
            time_remaining: self.time_remaining,
            project_id: self.project_id,
            user_id: self.user_id,
            user: self.user.map(User::into_dto),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts a backend record to an issue domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `record` - The issue record, with or without its joined reporter
    ///
    /// # Returns
    /// - `Issue` - The converted issue domain model
    pub fn from_record(record: IssueRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            kind: record.kind,
            status: record.status,
            priority: record.priority,
            list_position: record.list_position,
            description: record.description,
            description_text: record.description_text,
            estimate: record.estimate,
            time_spent: record.time_spent,
            time_remaining: record.time_remaining,
            project_id: record.project_id,
            user_id: record.user_id,
            user: record.user.map(User::from_record),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Parameters for opening a new issue.
#[derive(Debug, Clone)]
pub struct CreateIssueParams {
    pub title: String,
    pub kind: IssueType,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub list_position: f64,
    pub description: Option<String>,
    pub description_text: Option<String>,
    pub estimate: Option<i32>,
    pub time_spent: Option<i32>,
    pub time_remaining: Option<i32>,
    pub project_id: i32,
    pub user_id: i32,
}

impl CreateIssueParams {
    pub fn from_dto(dto: CreateIssueDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            kind: dto.kind,
            status: dto.status,
            priority: dto.priority,
            list_position: dto.list_position,
            description: dto.description,
            description_text: dto.description_text,
            estimate: dto.estimate,
            time_spent: dto.time_spent,
            time_remaining: dto.time_remaining,
            project_id: dto.project_id,
            user_id: dto.user_id,
        }
    }

    /// Converts into the `createIssue` payload.
    pub fn into_record(self) -> NewIssue {
        NewIssue {
            title: self.title,
            kind: self.kind,
            status: self.status,
            priority: self.priority,
            list_position: self.list_position,
            description: self.description,
            description_text: self.description_text,
            estimate: self.estimate,
            time_spent: self.time_spent,
            time_remaining: self.time_remaining,
            project_id: self.project_id,
            user_id: self.user_id,
        }
    }
}

/// Parameters for a partial update of the issue with `id`.
#[derive(Debug, Clone)]
pub struct UpdateIssueParams {
    pub id: i32,
    pub changes: IssueChanges,
}

impl UpdateIssueParams {
    pub fn from_dto(id: i32, dto: UpdateIssueDto) -> Self {
        Self {
            id,
            changes: IssueChanges {
                title: dto.title.map(|title| title.trim().to_string()),
                kind: dto.kind,
                status: dto.status,
                priority: dto.priority,
                list_position: dto.list_position,
                description: dto.description,
                description_text: dto.description_text,
                estimate: dto.estimate,
                time_spent: dto.time_spent,
                time_remaining: dto.time_remaining,
                user_id: dto.user_id,
            },
        }
    }

    /// Converts into the `editIssue` payload.
    pub fn into_record(self) -> EditById<IssueChanges> {
        EditById {
            id: self.id,
            changes: self.changes,
        }
    }
}

fn list_position(value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::BadRequest(
            "listPosition must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

fn hours(field: &str, value: Option<i32>) -> Result<(), AppError> {
    match value {
        Some(hours) if hours < 0 => Err(AppError::BadRequest(format!(
            "{} must not be negative",
            field
        ))),
        _ => Ok(()),
    }
}

impl Validate for CreateIssueDto {
    fn validate(&self) -> Result<(), AppError> {
        validate::text("title", &self.title, ISSUE_TITLE_MAX)?;
        list_position(self.list_position)?;
        validate::optional(self.description.as_deref(), |description| {
            validate::max_len("description", description, ISSUE_DESCRIPTION_MAX)
        })?;
        hours("estimate", self.estimate)?;
        hours("timeSpent", self.time_spent)?;
        hours("timeRemaining", self.time_remaining)?;
        validate::id("projectId", self.project_id)?;
        validate::id("userId", self.user_id)
    }
}

impl Validate for UpdateIssueDto {
    fn validate(&self) -> Result<(), AppError> {
        if *self == UpdateIssueDto::default() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }
        validate::optional(self.title.as_deref(), |title| {
            validate::text("title", title, ISSUE_TITLE_MAX)
        })?;
        if let Some(position) = self.list_position {
            list_position(position)?;
        }
        validate::optional(self.description.as_deref(), |description| {
            validate::max_len("description", description, ISSUE_DESCRIPTION_MAX)
        })?;
        hours("estimate", self.estimate)?;
        hours("timeSpent", self.time_spent)?;
        hours("timeRemaining", self.time_remaining)?;
        if let Some(user_id) = self.user_id {
            validate::id("userId", user_id)?;
        }
        Ok(())
    }
}
