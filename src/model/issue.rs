use chrono::{DateTime, Utc};
use protocol::record::enums::{IssuePriority, IssueStatus, IssueType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::UserDto;

/// Issue with its reporter joined in when the backend provides it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueDto {
    pub id: i32,
    pub title: String,
    #[serde(rename = "type")]
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
    pub user: Option<UserDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `priority` accepts either the level name or the legacy numeric string.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueDto {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: IssueType,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub list_position: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_text: Option<String>,
    #[serde(default)]
    pub estimate: Option<i32>,
    #[serde(default)]
    pub time_spent: Option<i32>,
    #[serde(default)]
    pub time_remaining: Option<i32>,
    pub project_id: i32,
    pub user_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<IssueType>,
    #[serde(default)]
    pub status: Option<IssueStatus>,
    #[serde(default)]
    pub priority: Option<IssuePriority>,
    #[serde(default)]
    pub list_position: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_text: Option<String>,
    #[serde(default)]
    pub estimate: Option<i32>,
    #[serde(default)]
    pub time_spent: Option<i32>,
    #[serde(default)]
    pub time_remaining: Option<i32>,
    #[serde(default)]
    pub user_id: Option<i32>,
}
