use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub issue_id: i32,
    pub user_id: i32,
    /// Author, included when the backend joins it.
    #[serde(default)]
    pub user: Option<UserRecord>,
}

/// Payload of `createComment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub body: String,
    pub issue_id: i32,
    pub user_id: i32,
}

/// Partial update applied by `editComment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
