use crate::server::{
    data::issue::IssueRepository,
    error::AppError,
    model::issue::{CreateIssueParams, Issue, UpdateIssueParams},
    rpc::ServiceClient,
};

pub struct IssueService<'a> {
    client: &'a ServiceClient,
}

impl<'a> IssueService<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Opens a new issue
    pub async fn create(&self, params: CreateIssueParams) -> Result<Issue, AppError> {
        let repo = IssueRepository::new(self.client);

        Ok(repo.create(params).await?)
    }

    /// Lists every issue across all projects
    pub async fn get_all(&self) -> Result<Vec<Issue>, AppError> {
        let repo = IssueRepository::new(self.client);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific issue by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Issue, AppError> {
        let repo = IssueRepository::new(self.client);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Issue not found".to_string()))
    }

    /// Lists the issues of a project, failing when the project itself does not exist
    pub async fn get_by_project(&self, project_id: i32) -> Result<Vec<Issue>, AppError> {
        let repo = IssueRepository::new(self.client);

        repo.find_by_project(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    /// Updates an issue
    pub async fn update(&self, params: UpdateIssueParams) -> Result<Issue, AppError> {
        let repo = IssueRepository::new(self.client);

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Issue not found to update".to_string()))
    }

    /// Deletes an issue
    pub async fn delete(&self, id: i32) -> Result<Issue, AppError> {
        let repo = IssueRepository::new(self.client);

        repo.delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Issue not found to delete".to_string()))
    }
}
