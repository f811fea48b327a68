use chrono::{DateTime, Utc};
use protocol::record::{
    enums::ProjectCategory,
    project::{NewProject, ProjectChanges, ProjectRecord},
    EditById,
};

use crate::{
    model::project::{CreateProjectDto, ProjectDto, UpdateProjectDto},
    server::{
        error::AppError,
        util::validate::{self, Validate, PROJECT_DESCRIPTION_MAX, PROJECT_NAME_MAX},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub category: ProjectCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            name: self.name,
            url: self.url,
            description: self.description,
            category: self.category,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_record(record: ProjectRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            url: record.url,
            description: record.description,
            category: record.category,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub category: ProjectCategory,
}

impl CreateProjectParams {
    pub fn from_dto(dto: CreateProjectDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            url: dto.url,
            description: dto.description,
            category: dto.category,
        }
    }

    pub fn into_record(self) -> NewProject {
        NewProject {
            name: self.name,
            url: self.url,
            description: self.description,
            category: self.category,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProjectParams {
    pub id: i32,
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub category: Option<ProjectCategory>,
}

impl UpdateProjectParams {
    pub fn from_dto(id: i32, dto: UpdateProjectDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
            url: dto.url,
            description: dto.description,
            category: dto.category,
        }
    }

    pub fn into_record(self) -> EditById<ProjectChanges> {
        EditById {
            id: self.id,
            changes: ProjectChanges {
                name: self.name,
                url: self.url,
                description: self.description,
                category: self.category,
            },
        }
    }
}

impl Validate for CreateProjectDto {
    fn validate(&self) -> Result<(), AppError> {
        validate::text("name", &self.name, PROJECT_NAME_MAX)?;
        validate::optional(self.url.as_deref(), |url| validate::http_url("url", url))?;
        validate::optional(self.description.as_deref(), |description| {
            validate::max_len("description", description, PROJECT_DESCRIPTION_MAX)
        })
    }
}

impl Validate for UpdateProjectDto {
    fn validate(&self) -> Result<(), AppError> {
        if self.name.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.category.is_none()
        {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }
        validate::optional(self.name.as_deref(), |name| {
            validate::text("name", name, PROJECT_NAME_MAX)
        })?;
        validate::optional(self.url.as_deref(), |url| validate::http_url("url", url))?;
        validate::optional(self.description.as_deref(), |description| {
            validate::max_len("description", description, PROJECT_DESCRIPTION_MAX)
        })
    }
}
