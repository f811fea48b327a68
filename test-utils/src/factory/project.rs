//! Project record factory.

use protocol::record::{enums::ProjectCategory, project::ProjectRecord};

use super::helpers::{next_id, timestamp};

pub struct ProjectFactory {
    record: ProjectRecord,
}

impl ProjectFactory {
    /// Defaults: unique id, name `"Project {id}"`, software category, no url or description.
    pub fn new() -> Self {
        let id = next_id();
        Self {
            record: ProjectRecord {
                id,
                name: format!("Project {}", id),
                url: None,
                description: None,
                category: ProjectCategory::Software,
                created_at: timestamp(),
                updated_at: timestamp(),
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

    pub fn category(mut self, category: ProjectCategory) -> Self {
        self.record.category = category;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = Some(description.into());
        self
    }

    pub fn build(self) -> ProjectRecord {
        self.record
    }
}

impl Default for ProjectFactory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_project() -> ProjectRecord {
    ProjectFactory::new().build()
}
