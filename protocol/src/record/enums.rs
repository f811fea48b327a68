//! Canonical enum vocabularies.
//!
//! Every enum serializes as its upper-case name. `IssuePriority` additionally accepts the
//! older numeric encoding (`"5"` for highest down to `"1"` for lowest) on input, so records
//! written by either generation of the data service decode to the same value.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    Task,
    Bug,
    Story,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum IssueStatus {
    #[serde(rename = "BACKLOG")]
    Backlog,
    #[serde(rename = "SELECTED")]
    Selected,
    #[serde(rename = "INPROGRESS")]
    InProgress,
    #[serde(rename = "DONE")]
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectCategory {
    Software,
    Marketing,
    Business,
}

/// Issue priority, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "PriorityRepr")]
pub enum IssuePriority {
    Lowest,
    Low,
    Medium,
    High,
    Highest,
}

impl IssuePriority {
    /// Legacy numeric level, `1` (lowest) to `5` (highest).
    pub fn level(&self) -> u8 {
        match self {
            IssuePriority::Lowest => 1,
            IssuePriority::Low => 2,
            IssuePriority::Medium => 3,
            IssuePriority::High => 4,
            IssuePriority::Highest => 5,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(IssuePriority::Lowest),
            2 => Some(IssuePriority::Low),
            3 => Some(IssuePriority::Medium),
            4 => Some(IssuePriority::High),
            5 => Some(IssuePriority::Highest),
            _ => None,
        }
    }
}

impl FromStr for IssuePriority {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s {
            "LOWEST" => Some(IssuePriority::Lowest),
            "LOW" => Some(IssuePriority::Low),
            "MEDIUM" => Some(IssuePriority::Medium),
            "HIGH" => Some(IssuePriority::High),
            "HIGHEST" => Some(IssuePriority::Highest),
            other => other.parse::<u8>().ok().and_then(IssuePriority::from_level),
        };

        parsed.ok_or_else(|| UnknownVariant {
            kind: "issue priority",
            value: s.to_string(),
        })
    }
}

/// Accepted input encodings for [`IssuePriority`].
#[derive(Deserialize)]
#[serde(untagged)]
enum PriorityRepr {
    Text(String),
    Level(u8),
}

impl TryFrom<PriorityRepr> for IssuePriority {
    type Error = UnknownVariant;

    fn try_from(repr: PriorityRepr) -> Result<Self, Self::Error> {
        match repr {
            PriorityRepr::Text(text) => text.parse(),
            PriorityRepr::Level(level) => {
                IssuePriority::from_level(level).ok_or_else(|| UnknownVariant {
                    kind: "issue priority",
                    value: level.to_string(),
                })
            }
        }
    }
}
