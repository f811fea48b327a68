use protocol::{
    record::{project::ProjectRecord, NoPayload},
    Command,
};

use crate::server::{
    model::project::{CreateProjectParams, Project, UpdateProjectParams},
    rpc::{RpcError, ServiceClient},
};

/// Repository providing project operations against the data service.
pub struct ProjectRepository<'a> {
    client: &'a ServiceClient,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, RpcError> {
        let record: ProjectRecord = self
            .client
            .expect(Command::CreateProject, &params.into_record())
            .await?;

        Ok(Project::from_record(record))
    }

    pub async fn get_all(&self) -> Result<Vec<Project>, RpcError> {
        let records: Vec<ProjectRecord> = self
            .client
            .list(Command::AllProjects, &NoPayload {})
            .await?;

        Ok(records.into_iter().map(Project::from_record).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Project>, RpcError> {
        let record: Option<ProjectRecord> = self.client.find(Command::FindProject, &id).await?;

        Ok(record.map(Project::from_record))
    }

    pub async fn update(&self, params: UpdateProjectParams) -> Result<Option<Project>, RpcError> {
        let record: Option<ProjectRecord> = self
            .client
            .find(Command::EditProject, &params.into_record())
            .await?;

        Ok(record.map(Project::from_record))
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Project>, RpcError> {
        let record: Option<ProjectRecord> = self.client.find(Command::DeleteProject, &id).await?;

        Ok(record.map(Project::from_record))
    }
}
