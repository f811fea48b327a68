use chrono::{DateTime, Utc};
use protocol::record::{
    comment::{CommentChanges, CommentRecord, NewComment},
    EditById,
};

use crate::{
    model::comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    server::{
        error::AppError,
        model::user::User,
        util::validate::{self, Validate, COMMENT_BODY_MAX},
    },
};

/// Comment on an issue, with its author when joined by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub body: String,
    pub issue_id: i32,
    pub user_id: i32,
    pub user: Option<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            body: self.body,
            issue_id: self.issue_id,
            user_id: self.user_id,
            user: self.user.map(User::into_dto),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_record(record: CommentRecord) -> Self {
        Self {
            id: record.id,
            body: record.body,
            issue_id: record.issue_id,
            user_id: record.user_id,
            user: record.user.map(User::from_record),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub body: String,
    pub issue_id: i32,
    pub user_id: i32,
}

impl CreateCommentParams {
    pub fn from_dto(dto: CreateCommentDto) -> Self {
        Self {
            body: dto.body,
            issue_id: dto.issue_id,
            user_id: dto.user_id,
        }
    }

    pub fn into_record(self) -> NewComment {
        NewComment {
            body: self.body,
            issue_id: self.issue_id,
            user_id: self.user_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCommentParams {
    pub id: i32,
    pub body: Option<String>,
}

impl UpdateCommentParams {
    pub fn from_dto(id: i32, dto: UpdateCommentDto) -> Self {
        Self { id, body: dto.body }
    }

    pub fn into_record(self) -> EditById<CommentChanges> {
        EditById {
            id: self.id,
            changes: CommentChanges { body: self.body },
        }
    }
}

impl Validate for CreateCommentDto {
    fn validate(&self) -> Result<(), AppError> {
        validate::text("body", &self.body, COMMENT_BODY_MAX)?;
        validate::id("issueId", self.issue_id)?;
        validate::id("userId", self.user_id)
    }
}

impl Validate for UpdateCommentDto {
    fn validate(&self) -> Result<(), AppError> {
        match self.body.as_deref() {
            Some(body) => validate::text("body", body, COMMENT_BODY_MAX),
            None => Err(AppError::BadRequest("No fields to update".to_string())),
        }
    }
}
